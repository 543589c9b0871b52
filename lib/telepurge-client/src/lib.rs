// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library deletes messages from Telegram chats through [Telegram's API].
//!
//! Create a [`Client`] with [`Client::new`], giving it the handle of a [`SenderPool`]
//! and a [`Config`] holding the session, then call [`Client::delete_messages`].
//!
//! Telegram uses a different request depending on where the messages live. Channels
//! (including megagroups) number their messages independently, so they need their own
//! request; private conversations and small group chats share the account's numbering.
//! The client picks the right one after resolving the chat.
//!
//! # Re-exports
//!
//! For convenience and to ease using compatible traits in lockstep, this
//! library re-exports the crates it builds upon.
//!
//! ## telepurge-mtsender as sender
//!
//! The [`SenderPool`] funnels requests into a single connection. The
//! [`InvocationError`] is also re-exported at the top level, as every request
//! may fail with it.
//!
//! ## telepurge-session as session
//!
//! Chat references can only be resolved for peers the [`session::Session`] has
//! cached, because Telegram requires their access hash.
//!
//! ## telepurge-tl-types as tl
//!
//! The raw [Type Language](https://core.telegram.org/mtproto/TL) definitions, in
//! case you want to [`Client::invoke`] them directly.
//!
//! [Telegram's API]: https://core.telegram.org/#telegram-api

#![deny(unsafe_code)]

pub mod client;
pub mod types;

pub use client::{Client, Config, DeleteMessagesError};
pub use telepurge_mtsender::{self as sender, InvocationError, SenderPool};
pub use telepurge_session as session;
pub use telepurge_tl_types as tl;
