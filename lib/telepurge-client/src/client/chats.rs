// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to users, groups and channels.

use telepurge_session::{ChatRef, ResolveError};
use telepurge_tl_types as tl;

use super::Client;

/// Method implementations related to dealing with peers.
impl Client {
    /// Resolves a chat reference into the peer used in requests.
    ///
    /// Only the [`Session`] is queried, so the chat must have been cached
    /// beforehand, unless it is the logged-in account (`"me"` or `"self"`) or a
    /// small group chat.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn f(client: telepurge_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let saved_messages = client.resolve_peer("me")?;
    /// let channel = client.resolve_peer(-1001234567890i64)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`Session`]: telepurge_session::Session
    pub fn resolve_peer<C: Into<ChatRef>>(
        &self,
        chat: C,
    ) -> Result<tl::enums::InputPeer, ResolveError> {
        self.0.session.resolve_peer(&chat.into())
    }
}
