// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(clippy::unreadable_literal)]

//! This module contains all of the boxed types, each
//! represented by a `enum`. All of them implement
//! [`Serializable`] and [`Deserializable`].
//!
//! Unlike bare [`types`], boxed types are prefixed by the constructor
//! identifier of the variant they hold.
//!
//! [`Serializable`]: ../trait.Serializable.html
//! [`Deserializable`]: ../trait.Deserializable.html
//! [`types`]: ../types/index.html
use crate::deserialize::{Buffer, Error, Result};
use crate::{Deserializable, Identifiable, Serializable, types};

#[derive(Clone, Debug, PartialEq)]
pub enum InputPeer {
    Empty,
    PeerSelf,
    Chat(types::InputPeerChat),
    User(types::InputPeerUser),
    Channel(types::InputPeerChannel),
}

impl Serializable for InputPeer {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        match self {
            Self::Empty => types::InputPeerEmpty::CONSTRUCTOR_ID.serialize(buf),
            Self::PeerSelf => types::InputPeerSelf::CONSTRUCTOR_ID.serialize(buf),
            Self::Chat(x) => {
                types::InputPeerChat::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::User(x) => {
                types::InputPeerUser::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
            Self::Channel(x) => {
                types::InputPeerChannel::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}

impl Deserializable for InputPeer {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(match u32::deserialize(buf)? {
            0x7f3b18eau32 => Self::Empty,
            0x7da07ec9u32 => Self::PeerSelf,
            0x35a95cb9u32 => Self::Chat(types::InputPeerChat::deserialize(buf)?),
            0xdde8a54cu32 => Self::User(types::InputPeerUser::deserialize(buf)?),
            0x27bcbbfcu32 => Self::Channel(types::InputPeerChannel::deserialize(buf)?),
            id => return Err(Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::InputPeerEmpty> for InputPeer {
    fn from(_x: types::InputPeerEmpty) -> Self {
        Self::Empty
    }
}

impl From<types::InputPeerSelf> for InputPeer {
    fn from(_x: types::InputPeerSelf) -> Self {
        Self::PeerSelf
    }
}

impl From<types::InputPeerChat> for InputPeer {
    fn from(x: types::InputPeerChat) -> Self {
        Self::Chat(x)
    }
}

impl From<types::InputPeerUser> for InputPeer {
    fn from(x: types::InputPeerUser) -> Self {
        Self::User(x)
    }
}

impl From<types::InputPeerChannel> for InputPeer {
    fn from(x: types::InputPeerChannel) -> Self {
        Self::Channel(x)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputChannel {
    Empty,
    Channel(types::InputChannel),
}

impl Serializable for InputChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        match self {
            Self::Empty => types::InputChannelEmpty::CONSTRUCTOR_ID.serialize(buf),
            Self::Channel(x) => {
                types::InputChannel::CONSTRUCTOR_ID.serialize(buf);
                x.serialize(buf);
            }
        }
    }
}

impl Deserializable for InputChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(match u32::deserialize(buf)? {
            0xee8c1e86u32 => Self::Empty,
            0xf35aec28u32 => Self::Channel(types::InputChannel::deserialize(buf)?),
            id => return Err(Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::InputChannelEmpty> for InputChannel {
    fn from(_x: types::InputChannelEmpty) -> Self {
        Self::Empty
    }
}

impl From<types::InputChannel> for InputChannel {
    fn from(x: types::InputChannel) -> Self {
        Self::Channel(x)
    }
}

pub mod messages {
    use crate::deserialize::{Buffer, Error, Result};
    use crate::{Deserializable, Identifiable, Serializable, types};

    #[derive(Clone, Debug, PartialEq)]
    pub enum AffectedMessages {
        Messages(types::messages::AffectedMessages),
    }

    impl Serializable for AffectedMessages {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            match self {
                Self::Messages(x) => {
                    types::messages::AffectedMessages::CONSTRUCTOR_ID.serialize(buf);
                    x.serialize(buf);
                }
            }
        }
    }

    impl Deserializable for AffectedMessages {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(match u32::deserialize(buf)? {
                0x84d19185u32 => {
                    Self::Messages(types::messages::AffectedMessages::deserialize(buf)?)
                }
                id => return Err(Error::UnexpectedConstructor { id }),
            })
        }
    }

    impl From<types::messages::AffectedMessages> for AffectedMessages {
        fn from(x: types::messages::AffectedMessages) -> Self {
            Self::Messages(x)
        }
    }
}
