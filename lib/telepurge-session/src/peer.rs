// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use telepurge_tl_types as tl;

// Per https://core.telegram.org/api/bots/ids:
// > a bot API dialog ID ranges from -4000000000000 to 1099511627775
const MAX_USER_ID: i64 = 0xffffffffff;
const MAX_CHAT_ID: i64 = 999999999999;
const MAX_CHANNEL_ID: i64 = 997852516352;
// Channels are prefixed by `-100` in the Bot API format.
const CHANNEL_OFFSET: i64 = 1000000000000;

/// The key under which a [`PeerInfo`] is cached by a [`crate::Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeerRef {
    /// The currently-logged-in user or bot account.
    SelfUser,
    User(i64),
    Chat(i64),
    Channel(i64),
}

/// Additional information about a [`PeerInfo::Channel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Megagroup,
    Broadcast,
    Gigagroup,
}

/// A peer along with any known useful information about it.
#[derive(Clone, Debug, PartialEq)]
pub enum PeerInfo {
    User {
        /// User identifier.
        ///
        /// Despite being `i64`, Telegram only uses strictly positive values.
        id: i64,
        /// Access hash bound to both the user itself and the session.
        ///
        /// It cannot be used by other sessions.
        hash: Option<i64>,
        /// Whether this user represents the logged-in user authorized by this session or not.
        is_self: bool,
        username: Option<String>,
        /// Only known for contacts in the address book.
        phone: Option<String>,
    },
    Chat {
        /// Chat identifier.
        ///
        /// Note that the HTTP Bot API negates this identifier to signal that it is a chat,
        /// but the true value used by Telegram's API is always strictly-positive.
        id: i64,
    },
    Channel {
        /// Channel identifier.
        ///
        /// Note that the HTTP Bot API prefixes this identifier with `-100` to signal that it is a channel,
        /// but the true value used by Telegram's API is always strictly-positive.
        id: i64,
        /// Access hash bound to both the channel itself and the session.
        ///
        /// It cannot be used by other sessions.
        hash: Option<i64>,
        kind: Option<ChannelKind>,
        username: Option<String>,
    },
}

impl PeerRef {
    /// Decode an identifier in the Bot API dialog format.
    ///
    /// Positive values are users, negative values are small group chats, and
    /// negative values prefixed by `-100` are channels (which includes
    /// megagroups and gigagroups). Returns `None` if the identifier falls
    /// outside every range.
    ///
    /// # Examples
    ///
    /// ```
    /// use telepurge_session::PeerRef;
    ///
    /// assert_eq!(PeerRef::from_dialog_id(777000), Some(PeerRef::User(777000)));
    /// assert_eq!(PeerRef::from_dialog_id(-123), Some(PeerRef::Chat(123)));
    /// assert_eq!(PeerRef::from_dialog_id(-1001234567890), Some(PeerRef::Channel(1234567890)));
    /// assert_eq!(PeerRef::from_dialog_id(0), None);
    /// ```
    pub fn from_dialog_id(id: i64) -> Option<Self> {
        if (1..=MAX_USER_ID).contains(&id) {
            Some(Self::User(id))
        } else if (-MAX_CHAT_ID..=-1).contains(&id) {
            Some(Self::Chat(-id))
        } else if (-(CHANNEL_OFFSET + MAX_CHANNEL_ID)..=-(CHANNEL_OFFSET + 1)).contains(&id) {
            Some(Self::Channel(-id - CHANNEL_OFFSET))
        } else {
            None
        }
    }

    /// Encode this reference in the Bot API dialog format.
    ///
    /// The self-user has no known identifier, so `None` is returned for it.
    pub fn to_dialog_id(self) -> Option<i64> {
        match self {
            Self::SelfUser => None,
            Self::User(id) => Some(id),
            Self::Chat(id) => Some(-id),
            Self::Channel(id) => Some(-(CHANNEL_OFFSET + id)),
        }
    }
}

impl PeerInfo {
    /// Convenience getter around the `id` without the need for matching.
    pub fn id(&self) -> i64 {
        match self {
            Self::User { id, .. } => *id,
            Self::Chat { id } => *id,
            Self::Channel { id, .. } => *id,
        }
    }

    /// Convenience getter around the `hash` without the need for matching.
    pub fn hash(&self) -> Option<i64> {
        match self {
            Self::User { hash, .. } => *hash,
            Self::Chat { .. } => None,
            Self::Channel { hash, .. } => *hash,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::User { username, .. } | Self::Channel { username, .. } => username.as_deref(),
            Self::Chat { .. } => None,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::User { phone, .. } => phone.as_deref(),
            Self::Chat { .. } | Self::Channel { .. } => None,
        }
    }

    /// The key under which this peer is cached.
    ///
    /// The self-user is keyed by its actual identifier here; sessions are
    /// expected to additionally make it reachable through [`PeerRef::SelfUser`].
    pub fn peer_ref(&self) -> PeerRef {
        match self {
            Self::User { id, .. } => PeerRef::User(*id),
            Self::Chat { id } => PeerRef::Chat(*id),
            Self::Channel { id, .. } => PeerRef::Channel(*id),
        }
    }

    /// Build the input peer used to refer to this peer in requests.
    ///
    /// Unknown access hashes are sent as `0`, which Telegram accepts whenever
    /// it has other means of authorizing the access (contacts, bots).
    pub fn to_input_peer(&self) -> tl::enums::InputPeer {
        match self {
            Self::User {
                is_self: true,
                hash: None,
                ..
            } => tl::enums::InputPeer::PeerSelf,
            Self::User { id, hash, .. } => tl::types::InputPeerUser {
                user_id: *id,
                access_hash: hash.unwrap_or(0),
            }
            .into(),
            Self::Chat { id } => tl::types::InputPeerChat { chat_id: *id }.into(),
            Self::Channel { id, hash, .. } => tl::types::InputPeerChannel {
                channel_id: *id,
                access_hash: hash.unwrap_or(0),
            }
            .into(),
        }
    }
}

impl fmt::Display for PeerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfUser => write!(f, "self-user"),
            Self::User(id) => write!(f, "user {id}"),
            Self::Chat(id) => write!(f, "chat {id}"),
            Self::Channel(id) => write!(f, "channel {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_id_bounds() {
        assert_eq!(PeerRef::from_dialog_id(1), Some(PeerRef::User(1)));
        assert_eq!(
            PeerRef::from_dialog_id(0xffffffffff),
            Some(PeerRef::User(0xffffffffff))
        );
        assert_eq!(PeerRef::from_dialog_id(0xffffffffff + 1), None);
        assert_eq!(
            PeerRef::from_dialog_id(-999999999999),
            Some(PeerRef::Chat(999999999999))
        );
        // The gap between chats and channels.
        assert_eq!(PeerRef::from_dialog_id(-1000000000000), None);
        assert_eq!(
            PeerRef::from_dialog_id(-1000000000001),
            Some(PeerRef::Channel(1))
        );
        assert_eq!(
            PeerRef::from_dialog_id(-1997852516352),
            Some(PeerRef::Channel(997852516352))
        );
        assert_eq!(PeerRef::from_dialog_id(-1997852516353), None);
    }

    #[test]
    fn dialog_id_encodes_back() {
        for id in [42, -42, -1000000000042] {
            let peer = PeerRef::from_dialog_id(id).unwrap();
            assert_eq!(peer.to_dialog_id(), Some(id));
        }
        assert_eq!(PeerRef::SelfUser.to_dialog_id(), None);
    }

    #[test]
    fn self_user_without_hash_is_peer_self() {
        let me = PeerInfo::User {
            id: 10,
            hash: None,
            is_self: true,
            username: None,
            phone: None,
        };
        assert_eq!(me.to_input_peer(), tl::enums::InputPeer::PeerSelf);

        let other = PeerInfo::User {
            id: 10,
            hash: None,
            is_self: false,
            username: None,
            phone: None,
        };
        assert_eq!(
            other.to_input_peer(),
            tl::types::InputPeerUser {
                user_id: 10,
                access_hash: 0
            }
            .into()
        );
    }

    #[test]
    fn megagroups_are_channels() {
        let group = PeerInfo::Channel {
            id: 5,
            hash: Some(99),
            kind: Some(ChannelKind::Megagroup),
            username: None,
        };
        assert_eq!(group.peer_ref(), PeerRef::Channel(5));
        assert_eq!(
            group.to_input_peer(),
            tl::types::InputPeerChannel {
                channel_id: 5,
                access_hash: 99
            }
            .into()
        );
    }
}
