// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::chat::normalize_handle;
use crate::errors::error;
use crate::{ChatRef, PeerInfo, PeerRef, ResolveError};
use log::trace;
use snafu::prelude::*;
use telepurge_tl_types as tl;

/// Storage for the peers a client has seen, and the resolver built on top.
///
/// Methods take `&self` because sessions are shared between the client and
/// whoever feeds them peers, so implementations need interior mutability.
pub trait Session: Send + Sync {
    /// Query a single peer by its type and ID.
    ///
    /// Querying for [`PeerRef::SelfUser`] returns the logged-in account, if known.
    fn peer(&self, peer: PeerRef) -> Option<PeerInfo>;

    /// Query a peer by its username.
    ///
    /// The lookup is case-insensitive and ignores a leading `@`.
    fn peer_by_username(&self, username: &str) -> Option<PeerInfo>;

    /// Query a user by the phone number they have in the address book.
    ///
    /// Only the digits of the phone number are significant.
    fn peer_by_phone(&self, phone: &str) -> Option<PeerInfo>;

    /// Cache a peer for the query methods to be able to find it later.
    ///
    /// Users where [`PeerInfo::User::is_self`] is `true` must also become
    /// reachable through [`PeerRef::SelfUser`].
    fn cache_peer(&self, peer: &PeerInfo);

    /// Resolve a user-supplied chat reference into the peer used by requests.
    ///
    /// * `"me"` and `"self"` (case-insensitive) resolve to the logged-in account
    ///   without querying the cache.
    /// * Other textual handles consisting only of digits (after dropping `+` and
    ///   whitespace) are treated as phone numbers; anything else as a username.
    /// * Numeric identifiers are decoded with [`PeerRef::from_dialog_id`]. Small
    ///   group chats resolve without the cache, because they are not protected by
    ///   an access hash. Users and channels must have been cached.
    ///
    /// The default implementation is built on the query methods above.
    fn resolve_peer(&self, chat: &ChatRef) -> Result<tl::enums::InputPeer, ResolveError> {
        resolve(self, chat)
    }
}

fn resolve<S: Session + ?Sized>(
    session: &S,
    chat: &ChatRef,
) -> Result<tl::enums::InputPeer, ResolveError> {
    let peer = match chat {
        ChatRef::Id(id) => resolve_id(session, *id)?,
        ChatRef::Handle(_) if chat.is_self() => tl::enums::InputPeer::PeerSelf,
        ChatRef::Handle(handle) => resolve_handle(session, handle)?,
    };
    trace!("resolved {chat:?} into {peer:?}");
    Ok(peer)
}

fn resolve_id<S: Session + ?Sized>(
    session: &S,
    id: i64,
) -> Result<tl::enums::InputPeer, ResolveError> {
    let peer = PeerRef::from_dialog_id(id).context(error::InvalidIdSnafu { id })?;
    if let PeerRef::Chat(chat_id) = peer {
        return Ok(tl::types::InputPeerChat { chat_id }.into());
    }

    session
        .peer(peer)
        .map(|info| info.to_input_peer())
        .context(error::PeerNotCachedSnafu { peer })
}

fn resolve_handle<S: Session + ?Sized>(
    session: &S,
    handle: &str,
) -> Result<tl::enums::InputPeer, ResolveError> {
    let handle = normalize_handle(handle);
    ensure!(!handle.is_empty(), error::EmptyHandleSnafu);

    if handle.bytes().all(|b| b.is_ascii_digit()) {
        session
            .peer_by_phone(&handle)
            .map(|info| info.to_input_peer())
            .context(error::PhoneNotFoundSnafu { phone: handle })
    } else {
        session
            .peer_by_username(&handle)
            .map(|info| info.to_input_peer())
            .context(error::UsernameNotFoundSnafu { username: handle })
    }
}
