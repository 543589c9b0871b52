// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use telepurge_tl_types::deserialize::Error;
use telepurge_tl_types::{Deserializable, Identifiable, Serializable, enums, functions, types};

#[test]
fn revoke_sets_the_first_flag_bit() {
    let bytes = functions::messages::DeleteMessages {
        revoke: true,
        id: vec![10, 11],
    }
    .to_bytes();

    assert_eq!(
        bytes,
        [
            0xd2, 0x95, 0x8e, 0xe5, // messages.deleteMessages
            0x01, 0x00, 0x00, 0x00, // flags
            0x15, 0xc4, 0xb5, 0x1c, // vector
            0x02, 0x00, 0x00, 0x00, // len
            0x0a, 0x00, 0x00, 0x00, // 10
            0x0b, 0x00, 0x00, 0x00, // 11
        ]
    );
}

#[test]
fn no_revoke_leaves_flags_empty() {
    let bytes = functions::messages::DeleteMessages {
        revoke: false,
        id: vec![10],
    }
    .to_bytes();

    assert_eq!(&bytes[..4], &0xe58e95d2u32.to_le_bytes());
    assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
    assert_eq!(bytes.len(), 4 + 4 + 8 + 4);
}

#[test]
fn channel_delete_has_no_flags() {
    let bytes = functions::channels::DeleteMessages {
        channel: types::InputChannel {
            channel_id: 1234,
            access_hash: -1,
        }
        .into(),
        id: vec![42],
    }
    .to_bytes();

    let mut expected = Vec::new();
    expected.extend(0x84c1fd4eu32.to_le_bytes());
    expected.extend(0xf35aec28u32.to_le_bytes());
    expected.extend(1234i64.to_le_bytes());
    expected.extend((-1i64).to_le_bytes());
    expected.extend(0x1cb5c415u32.to_le_bytes());
    expected.extend(1i32.to_le_bytes());
    expected.extend(42i32.to_le_bytes());
    assert_eq!(bytes, expected);
}

#[test]
fn boxed_input_peer_reads_back() {
    let peer = enums::InputPeer::Channel(types::InputPeerChannel {
        channel_id: 77,
        access_hash: 0x1122334455667788,
    });
    assert_eq!(enums::InputPeer::from_bytes(&peer.to_bytes()), Ok(peer));
    assert_eq!(
        enums::InputPeer::from_bytes(&enums::InputPeer::PeerSelf.to_bytes()),
        Ok(enums::InputPeer::PeerSelf)
    );
}

#[test]
fn affected_messages_from_response() {
    let mut response = Vec::new();
    response.extend(types::messages::AffectedMessages::CONSTRUCTOR_ID.to_le_bytes());
    response.extend(1050i32.to_le_bytes());
    response.extend(2i32.to_le_bytes());

    assert_eq!(
        enums::messages::AffectedMessages::from_bytes(&response),
        Ok(enums::messages::AffectedMessages::Messages(
            types::messages::AffectedMessages {
                pts: 1050,
                pts_count: 2,
            }
        ))
    );
}

#[test]
fn rpc_error_with_long_message() {
    let error = types::RpcError {
        error_code: 400,
        error_message: "MESSAGE_ID_INVALID".repeat(20),
    };
    let bytes = error.to_bytes();
    assert_eq!(bytes.len() % 4, 0);
    assert_eq!(types::RpcError::from_bytes(&bytes), Ok(error));
}

#[test]
fn unexpected_constructor_is_reported() {
    assert_eq!(
        enums::InputChannel::from_bytes(&0xdeadbeefu32.to_le_bytes()),
        Err(Error::UnexpectedConstructor { id: 0xdeadbeef })
    );
    assert_eq!(
        enums::messages::AffectedMessages::from_bytes(&[0x85, 0x91]),
        Err(Error::UnexpectedEof)
    );
}

#[test]
fn names_for_known_ids() {
    assert_eq!(
        telepurge_tl_types::name_for_id(functions::messages::DeleteMessages::CONSTRUCTOR_ID),
        "messages.deleteMessages"
    );
    assert_eq!(
        telepurge_tl_types::name_for_id(functions::channels::DeleteMessages::CONSTRUCTOR_ID),
        "channels.deleteMessages"
    );
    assert_eq!(telepurge_tl_types::name_for_id(0), "(unknown)");
}
