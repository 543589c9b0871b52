// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::chat::normalize_handle;
use crate::{PeerInfo, PeerRef, Session};
use log::trace;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Cache {
    peers: HashMap<PeerRef, PeerInfo>,
    usernames: HashMap<String, PeerRef>,
    phones: HashMap<String, PeerRef>,
}

/// A basic session implementation, kept only in-memory.
///
/// Nothing is persisted: the cache starts empty every time.
#[derive(Default)]
pub struct MemorySession {
    cache: Mutex<Cache>,
}

impl MemorySession {
    /// Create a new session instance.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache {
    fn lookup(
        &self,
        key: &str,
        index: &HashMap<String, PeerRef>,
        field: fn(&PeerInfo) -> Option<&str>,
    ) -> Option<PeerInfo> {
        let peer = index.get(key)?;
        // The peer may have changed its username or phone since it was indexed.
        self.peers
            .get(peer)
            .filter(|info| field(info).map(normalize_handle).as_deref() == Some(key))
            .cloned()
    }
}

impl Session for MemorySession {
    fn peer(&self, peer: PeerRef) -> Option<PeerInfo> {
        let cache = self.cache.lock().unwrap();
        cache.peers.get(&peer).cloned()
    }

    fn peer_by_username(&self, username: &str) -> Option<PeerInfo> {
        let cache = self.cache.lock().unwrap();
        cache.lookup(
            &normalize_handle(username),
            &cache.usernames,
            PeerInfo::username,
        )
    }

    fn peer_by_phone(&self, phone: &str) -> Option<PeerInfo> {
        let cache = self.cache.lock().unwrap();
        cache.lookup(&normalize_handle(phone), &cache.phones, PeerInfo::phone)
    }

    fn cache_peer(&self, peer: &PeerInfo) {
        let mut cache = self.cache.lock().unwrap();
        let key = peer.peer_ref();

        let mut peer = peer.clone();
        // A min constructor lacks the hash, but the one known before is still valid.
        if peer.hash().is_none() {
            if let Some(known) = cache.peers.get(&key).and_then(PeerInfo::hash) {
                match &mut peer {
                    PeerInfo::User { hash, .. } | PeerInfo::Channel { hash, .. } => {
                        *hash = Some(known)
                    }
                    PeerInfo::Chat { .. } => {}
                }
            }
        }

        if let Some(username) = peer.username() {
            cache.usernames.insert(normalize_handle(username), key);
        }
        if let Some(phone) = peer.phone() {
            cache.phones.insert(normalize_handle(phone), key);
        }
        if let PeerInfo::User { is_self: true, .. } = peer {
            cache.peers.insert(PeerRef::SelfUser, peer.clone());
        }

        trace!("caching {key}");
        cache.peers.insert(key, peer);
    }
}
