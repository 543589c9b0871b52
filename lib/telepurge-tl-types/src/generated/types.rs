// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(clippy::unreadable_literal)]

//! This module contains all of the bare types, each
//! represented by a `struct`. All of them implement
//! [`Identifiable`], [`Serializable`] and [`Deserializable`].
//!
//! [`Identifiable`]: ../trait.Identifiable.html
//! [`Serializable`]: ../trait.Serializable.html
//! [`Deserializable`]: ../trait.Deserializable.html
use crate::deserialize::{Buffer, Result};
use crate::{Deserializable, Identifiable, Serializable};

/// ```tl
/// inputPeerEmpty#7f3b18ea = InputPeer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerEmpty {}

impl Identifiable for InputPeerEmpty {
    const CONSTRUCTOR_ID: u32 = 0x7f3b18ea;
}

impl Serializable for InputPeerEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputPeerEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// ```tl
/// inputPeerSelf#7da07ec9 = InputPeer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerSelf {}

impl Identifiable for InputPeerSelf {
    const CONSTRUCTOR_ID: u32 = 0x7da07ec9;
}

impl Serializable for InputPeerSelf {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputPeerSelf {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// ```tl
/// inputPeerChat#35a95cb9 chat_id:long = InputPeer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChat {
    pub chat_id: i64,
}

impl Identifiable for InputPeerChat {
    const CONSTRUCTOR_ID: u32 = 0x35a95cb9;
}

impl Serializable for InputPeerChat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
    }
}

impl Deserializable for InputPeerChat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let chat_id = i64::deserialize(buf)?;
        Ok(Self { chat_id })
    }
}

/// ```tl
/// inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerUser {
    pub user_id: i64,
    pub access_hash: i64,
}

impl Identifiable for InputPeerUser {
    const CONSTRUCTOR_ID: u32 = 0xdde8a54c;
}

impl Serializable for InputPeerUser {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputPeerUser {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let user_id = i64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;
        Ok(Self {
            user_id,
            access_hash,
        })
    }
}

/// ```tl
/// inputPeerChannel#27bcbbfc channel_id:long access_hash:long = InputPeer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

impl Identifiable for InputPeerChannel {
    const CONSTRUCTOR_ID: u32 = 0x27bcbbfc;
}

impl Serializable for InputPeerChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputPeerChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let channel_id = i64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;
        Ok(Self {
            channel_id,
            access_hash,
        })
    }
}

/// ```tl
/// inputChannelEmpty#ee8c1e86 = InputChannel;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputChannelEmpty {}

impl Identifiable for InputChannelEmpty {
    const CONSTRUCTOR_ID: u32 = 0xee8c1e86;
}

impl Serializable for InputChannelEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputChannelEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// ```tl
/// inputChannel#f35aec28 channel_id:long access_hash:long = InputChannel;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InputChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

impl Identifiable for InputChannel {
    const CONSTRUCTOR_ID: u32 = 0xf35aec28;
}

impl Serializable for InputChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let channel_id = i64::deserialize(buf)?;
        let access_hash = i64::deserialize(buf)?;
        Ok(Self {
            channel_id,
            access_hash,
        })
    }
}

/// ```tl
/// rpc_error#2144ca19 error_code:int error_message:string = RpcError;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.error_code.serialize(buf);
        self.error_message.serialize(buf);
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let error_code = i32::deserialize(buf)?;
        let error_message = String::deserialize(buf)?;
        Ok(Self {
            error_code,
            error_message,
        })
    }
}

pub mod messages {
    use crate::deserialize::{Buffer, Result};
    use crate::{Deserializable, Identifiable, Serializable};

    /// ```tl
    /// messages.affectedMessages#84d19185 pts:int pts_count:int = messages.AffectedMessages;
    /// ```
    #[derive(Clone, Debug, PartialEq)]
    pub struct AffectedMessages {
        pub pts: i32,
        pub pts_count: i32,
    }

    impl Identifiable for AffectedMessages {
        const CONSTRUCTOR_ID: u32 = 0x84d19185;
    }

    impl Serializable for AffectedMessages {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.pts.serialize(buf);
            self.pts_count.serialize(buf);
        }
    }

    impl Deserializable for AffectedMessages {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let pts = i32::deserialize(buf)?;
            let pts_count = i32::deserialize(buf)?;
            Ok(Self { pts, pts_count })
        }
    }
}
