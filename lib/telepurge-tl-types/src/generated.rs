// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Definitions laid out the same way the TL code generator would emit them:
//! bare constructors in [`types`], boxed types in [`enums`], and remote
//! procedure calls in [`functions`], each namespace in its own module.
pub mod enums;
pub mod functions;
pub mod types;

/// The schema layer these definitions were taken from.
pub const LAYER: i32 = 181;

/// Return the name from the `.tl` definition corresponding to the provided
/// definition identifier.
///
/// Identifiers not known to this crate produce `"(unknown)"`.
pub fn name_for_id(id: u32) -> &'static str {
    match id {
        0x7f3b18ea => "inputPeerEmpty",
        0x7da07ec9 => "inputPeerSelf",
        0x35a95cb9 => "inputPeerChat",
        0xdde8a54c => "inputPeerUser",
        0x27bcbbfc => "inputPeerChannel",
        0xee8c1e86 => "inputChannelEmpty",
        0xf35aec28 => "inputChannel",
        0x84d19185 => "messages.affectedMessages",
        0x2144ca19 => "rpc_error",
        0xe58e95d2 => "messages.deleteMessages",
        0x84c1fd4e => "channels.deleteMessages",
        0x1cb5c415 => "vector",
        _ => "(unknown)",
    }
}
