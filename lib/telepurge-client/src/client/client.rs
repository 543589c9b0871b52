// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::sync::Arc;

use telepurge_mtsender::SenderPoolHandle;
use telepurge_session::Session;

/// Configuration required to create a [`Client`] instance.
pub struct Config {
    /// Session storage holding the peers that chat references resolve to.
    ///
    /// It is shared, so whoever learns about new peers can keep caching them
    /// while the client is in use.
    pub session: Arc<dyn Session>,
}

pub(crate) struct ClientInner {
    pub(crate) session: Arc<dyn Session>,
    pub(crate) handle: SenderPoolHandle,
}

/// Wrapper around a [`SenderPoolHandle`] to facilitate interaction with Telegram's API.
///
/// This structure is the "entry point" of the library. It can be freely cloned and moved
/// around tasks to make requests concurrently; all clones share the same session and sender.
///
/// The client keeps no state between calls besides what the [`Session`] stores.
#[derive(Clone)]
pub struct Client(pub(crate) Arc<ClientInner>);

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
