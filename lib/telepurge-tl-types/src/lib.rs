// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the subset of Telegram's
//! [`types`] and [`functions`] needed to delete messages, in the form of
//! `struct` and `enum`. All of them implement [`Serializable`], and by
//! default only types implement [`Deserializable`].
//!
//! # Features
//!
//! * `deserializable-functions`: implements [`Deserializable`] for
//!   [`functions`]. This is of interest to anything that needs to inspect
//!   the requests a client produces (servers, test doubles), but is
//!   otherwise not required.
//!
//! [`types`]: types/index.html
//! [`functions`]: functions/index.html
//! [`Serializable`]: trait.Serializable.html
//! [`Deserializable`]: trait.Deserializable.html
pub mod deserialize;
mod generated;
mod serialize;

pub use deserialize::Deserializable;
pub use generated::{LAYER, enums, functions, name_for_id, types};
pub use serialize::Serializable;

/// Anything implementing this trait is identifiable by both ends (client-server)
/// when performing Remote Procedure Calls (RPC) and transmission of objects.
pub trait Identifiable {
    /// The unique identifier for the type.
    const CONSTRUCTOR_ID: u32;
}

/// Structures implementing this trait indicate that they are suitable for
/// use to perform Remote Procedure Calls (RPC), and know what the type of
/// the response will be.
pub trait RemoteCall: Serializable {
    /// The type of the "return" value coming from the other end of the
    /// connection.
    type Return: Deserializable;
}

#[cfg(test)]
mod tests {
    include!("../../includes/check_deps_documented.rs");
}
