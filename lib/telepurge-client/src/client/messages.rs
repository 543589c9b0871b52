// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages.

use log::debug;
use telepurge_mtsender::InvocationError;
use telepurge_session::ChatRef;
use telepurge_tl_types as tl;

use super::{Client, DeleteMessagesError};
use crate::types::MessageIds;

/// The request used to delete messages, which depends on where they live.
///
/// Messages in channels (broadcast channels, megagroups and gigagroups) have
/// their own numbering per channel, so the channel must be sent along. Every
/// other message (private conversations, small group chats, "Saved Messages")
/// shares the numbering of the account's inbox, which is why the peer itself
/// is never sent in that case.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DeleteRequest {
    Channel(tl::functions::channels::DeleteMessages),
    Generic(tl::functions::messages::DeleteMessages),
}

impl DeleteRequest {
    /// Build the request for the resolved peer.
    ///
    /// `revoke` only has meaning outside channels, where deletion is always
    /// for everyone, so it is ignored for those.
    pub(crate) fn new(peer: tl::enums::InputPeer, message_ids: MessageIds, revoke: bool) -> Self {
        let id = message_ids.into_vec();
        match peer {
            tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
                channel_id,
                access_hash,
            }) => Self::Channel(tl::functions::channels::DeleteMessages {
                channel: tl::types::InputChannel {
                    channel_id,
                    access_hash,
                }
                .into(),
                id,
            }),
            tl::enums::InputPeer::Empty
            | tl::enums::InputPeer::PeerSelf
            | tl::enums::InputPeer::Chat(_)
            | tl::enums::InputPeer::User(_) => {
                Self::Generic(tl::functions::messages::DeleteMessages { revoke, id })
            }
        }
    }

    async fn invoke(
        &self,
        client: &Client,
    ) -> Result<tl::enums::messages::AffectedMessages, InvocationError> {
        match self {
            Self::Channel(request) => client.invoke(request).await,
            Self::Generic(request) => client.invoke(request).await,
        }
    }
}

/// Method implementations related to sending, modifying or getting messages.
impl Client {
    /// Deletes messages for everyone.
    ///
    /// This is [`Client::delete_messages_with_revoke`] with `revoke` set to `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telepurge_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// // Careful, these messages will be gone after the method succeeds!
    /// client.delete_messages("me", [10, 11]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_messages<C: Into<ChatRef>, M: Into<MessageIds>>(
        &self,
        chat: C,
        message_ids: M,
    ) -> Result<bool, DeleteMessagesError> {
        self.delete_messages_with_revoke(chat, message_ids, true)
            .await
    }

    /// Deletes messages in a chat.
    ///
    /// The `chat` is resolved through the session first; if that fails, nothing is sent.
    ///
    /// In broadcast channels and megagroups, messages are always deleted for everyone and
    /// `revoke` is ignored. Elsewhere, `revoke` decides whether the messages are also deleted
    /// for the other participants (`true`) or only for the logged-in account (`false`).
    ///
    /// <div class="warning">
    ///
    /// Outside of channels, message identifiers are global to the account, so this method
    /// cannot validate that they actually belong to `chat`. Make sure to pass the right ones.
    ///
    /// </div>
    ///
    /// Returns `true` once Telegram accepts the request. Identifiers of messages that were
    /// already gone are not an error, and none of the given messages will appear in the
    /// history from that point on. Errors are returned exactly as they occurred; nothing
    /// is retried.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telepurge_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// // Remove a message from a channel's history.
    /// client.delete_messages_with_revoke(-1001234567890i64, 42, false).await?;
    ///
    /// // Only clear the copy kept by the logged-in account.
    /// client.delete_messages_with_revoke("@durov", vec![1, 2, 3], false).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_messages_with_revoke<C: Into<ChatRef>, M: Into<MessageIds>>(
        &self,
        chat: C,
        message_ids: M,
        revoke: bool,
    ) -> Result<bool, DeleteMessagesError> {
        let peer = self.resolve_peer(chat)?;
        let request = DeleteRequest::new(peer, message_ids.into(), revoke);
        debug!("deleting messages with {request:?}");

        let tl::enums::messages::AffectedMessages::Messages(affected) =
            request.invoke(self).await?;
        debug!(
            "{} messages deleted (pts = {})",
            affected.pts_count, affected.pts
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> tl::enums::InputPeer {
        tl::types::InputPeerChannel {
            channel_id: 1234567890,
            access_hash: -77,
        }
        .into()
    }

    #[test]
    fn channels_use_channel_request() {
        for revoke in [true, false] {
            assert_eq!(
                DeleteRequest::new(channel(), 42.into(), revoke),
                DeleteRequest::Channel(tl::functions::channels::DeleteMessages {
                    channel: tl::types::InputChannel {
                        channel_id: 1234567890,
                        access_hash: -77,
                    }
                    .into(),
                    id: vec![42],
                })
            );
        }
    }

    #[test]
    fn other_peers_use_generic_request() {
        let peers = [
            tl::enums::InputPeer::Empty,
            tl::enums::InputPeer::PeerSelf,
            tl::types::InputPeerChat { chat_id: 5 }.into(),
            tl::types::InputPeerUser {
                user_id: 6,
                access_hash: 7,
            }
            .into(),
        ];
        for peer in peers {
            for revoke in [true, false] {
                assert_eq!(
                    DeleteRequest::new(peer.clone(), vec![10, 11].into(), revoke),
                    DeleteRequest::Generic(tl::functions::messages::DeleteMessages {
                        revoke,
                        id: vec![10, 11],
                    })
                );
            }
        }
    }

    #[test]
    fn empty_ids_are_passed_through() {
        assert_eq!(
            DeleteRequest::new(tl::enums::InputPeer::PeerSelf, Vec::new().into(), true),
            DeleteRequest::Generic(tl::functions::messages::DeleteMessages {
                revoke: true,
                id: Vec::new(),
            })
        );
    }
}
