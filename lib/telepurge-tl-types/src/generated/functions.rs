// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(clippy::identity_op, clippy::unreadable_literal)]

//! This module contains all of the functions, each
//! represented by a `struct`. All of them implement
//! [`Identifiable`] and [`Serializable`].
//!
//! To find out the type that Telegram will return upon
//! invoking one of these requests, check out the associated
//! type in the corresponding [`RemoteCall`] trait impl.
//!
//! [`Identifiable`]: ../trait.Identifiable.html
//! [`Serializable`]: ../trait.Serializable.html
//! [`RemoteCall`]: ../trait.RemoteCall.html

pub mod messages {
    #[cfg(feature = "deserializable-functions")]
    use crate::Deserializable;
    #[cfg(feature = "deserializable-functions")]
    use crate::deserialize::{Buffer, Result};
    use crate::{Identifiable, RemoteCall, Serializable};

    /// ```tl
    /// messages.deleteMessages#e58e95d2 flags:# revoke:flags.0?true id:Vector<int> = messages.AffectedMessages;
    /// ```
    ///
    /// `revoke` is a `true`-typed flag: the wire can only carry it as "set"
    /// or "absent". `true` sets bit 0 of `flags`, `false` leaves it unset.
    /// There is no encoding for an explicit `false`.
    #[derive(Clone, Debug, PartialEq)]
    pub struct DeleteMessages {
        pub revoke: bool,
        pub id: Vec<i32>,
    }

    impl Identifiable for DeleteMessages {
        const CONSTRUCTOR_ID: u32 = 0xe58e95d2;
    }

    impl Serializable for DeleteMessages {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            (0u32 | if self.revoke { 1 } else { 0 }).serialize(buf);
            self.id.serialize(buf);
        }
    }

    #[cfg(feature = "deserializable-functions")]
    impl Deserializable for DeleteMessages {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let flags = u32::deserialize(buf)?;
            let revoke = (flags & 1) != 0;
            let id = Vec::<i32>::deserialize(buf)?;
            Ok(Self { revoke, id })
        }
    }

    impl RemoteCall for DeleteMessages {
        type Return = crate::enums::messages::AffectedMessages;
    }
}

pub mod channels {
    #[cfg(feature = "deserializable-functions")]
    use crate::Deserializable;
    #[cfg(feature = "deserializable-functions")]
    use crate::deserialize::{Buffer, Result};
    use crate::{Identifiable, RemoteCall, Serializable};

    /// ```tl
    /// channels.deleteMessages#84c1fd4e channel:InputChannel id:Vector<int> = messages.AffectedMessages;
    /// ```
    #[derive(Clone, Debug, PartialEq)]
    pub struct DeleteMessages {
        pub channel: crate::enums::InputChannel,
        pub id: Vec<i32>,
    }

    impl Identifiable for DeleteMessages {
        const CONSTRUCTOR_ID: u32 = 0x84c1fd4e;
    }

    impl Serializable for DeleteMessages {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.channel.serialize(buf);
            self.id.serialize(buf);
        }
    }

    #[cfg(feature = "deserializable-functions")]
    impl Deserializable for DeleteMessages {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let channel = crate::enums::InputChannel::deserialize(buf)?;
            let id = Vec::<i32>::deserialize(buf)?;
            Ok(Self { channel, id })
        }
    }

    impl RemoteCall for DeleteMessages {
        type Return = crate::enums::messages::AffectedMessages;
    }
}
