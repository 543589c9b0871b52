// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contains client-specific configuration and types.

mod chats;
#[allow(clippy::module_inception)]
mod client;
mod errors;
mod messages;
mod net;

pub(crate) use client::ClientInner;
pub use client::{Client, Config};
pub use errors::DeleteMessagesError;
