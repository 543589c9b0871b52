// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::PeerRef;
use snafu::Snafu;

/// This error occurs when a [`crate::ChatRef`] cannot be turned into a peer.
#[derive(Snafu, Clone, Debug, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
#[snafu(module(error))]
pub enum ResolveError {
    #[snafu(display("{id} is not a valid dialog identifier"))]
    InvalidId { id: i64 },

    #[snafu(display("{peer} is not known to the session, so its access hash is missing"))]
    PeerNotCached { peer: PeerRef },

    #[snafu(display("no peer with username \"{username}\" is known to the session"))]
    UsernameNotFound { username: String },

    #[snafu(display("no contact with phone number \"{phone}\" is known to the session"))]
    PhoneNotFound { phone: String },

    #[snafu(display("chat handle is empty"))]
    EmptyHandle,
}
