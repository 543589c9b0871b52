// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library keeps track of the peers a Telegram client has seen, and
//! resolves user-supplied [`ChatRef`]s into the `InputPeer` values that
//! requests need.
//!
//! Telegram protects users and channels with an access hash that is only
//! handed out along with the peer itself, so a [`Session`] must have cached
//! the peer before it can be referred to.
mod chat;
mod errors;
mod memory_session;
mod peer;
mod session;

pub use chat::ChatRef;
pub use errors::ResolveError;
pub use memory_session::MemorySession;
pub use peer::{ChannelKind, PeerInfo, PeerRef};
pub use session::Session;
