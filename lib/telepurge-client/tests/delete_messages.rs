// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Checks the requests that reach the connection when deleting messages.

use std::cell::Cell;
use std::collections::VecDeque;
use std::error::Error as _;
use std::io;
use std::sync::{Arc, Mutex};

use telepurge_client::sender::{Connection, ReadError, RpcError, SenderPoolRunner};
use telepurge_client::session::{ChannelKind, MemorySession, PeerInfo, ResolveError, Session};
use telepurge_client::tl::{self, Deserializable, Identifiable, Serializable};
use telepurge_client::types::MessageIds;
use telepurge_client::{Client, Config, DeleteMessagesError, InvocationError, SenderPool};

const CHANNEL_ID: i64 = 1234567890;
const CHANNEL_HASH: i64 = -4242;
const USER_ID: i64 = 5550001;
const USER_HASH: i64 = 31337;

/// Replies with canned responses in order (or a successful deletion once they
/// run out), remembering every request body.
struct Recorder {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    replies: VecDeque<Result<Vec<u8>, ReadError>>,
}

impl Recorder {
    fn new() -> Self {
        Self::replying([])
    }

    fn replying(replies: impl IntoIterator<Item = Result<Vec<u8>, ReadError>>) -> Self {
        Self {
            sent: Arc::default(),
            replies: replies.into_iter().collect(),
        }
    }
}

impl Connection for Recorder {
    fn call(
        &mut self,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, ReadError>> + Send {
        self.sent.lock().unwrap().push(body);
        let reply = self.replies.pop_front().unwrap_or_else(|| Ok(affected(1)));
        async move { reply }
    }
}

/// The request as decoded from the bytes that were sent.
#[derive(Debug, PartialEq)]
enum Sent {
    Generic(tl::functions::messages::DeleteMessages),
    Channel(tl::functions::channels::DeleteMessages),
}

fn decode(body: &[u8]) -> Sent {
    let constructor_id = u32::from_le_bytes(body[..4].try_into().unwrap());
    if constructor_id == tl::functions::messages::DeleteMessages::CONSTRUCTOR_ID {
        Sent::Generic(tl::functions::messages::DeleteMessages::from_bytes(&body[4..]).unwrap())
    } else if constructor_id == tl::functions::channels::DeleteMessages::CONSTRUCTOR_ID {
        Sent::Channel(tl::functions::channels::DeleteMessages::from_bytes(&body[4..]).unwrap())
    } else {
        panic!("unexpected request {}", tl::name_for_id(constructor_id))
    }
}

fn affected(pts_count: i32) -> Vec<u8> {
    tl::enums::messages::AffectedMessages::from(tl::types::messages::AffectedMessages {
        pts: 1000 + pts_count,
        pts_count,
    })
    .to_bytes()
}

fn rpc_error(code: i32, message: &str) -> Vec<u8> {
    let mut buffer = tl::types::RpcError::CONSTRUCTOR_ID.to_le_bytes().to_vec();
    tl::types::RpcError {
        error_code: code,
        error_message: message.to_string(),
    }
    .serialize(&mut buffer);
    buffer
}

fn session() -> Arc<MemorySession> {
    let session = Arc::new(MemorySession::new());
    session.cache_peer(&PeerInfo::Channel {
        id: CHANNEL_ID,
        hash: Some(CHANNEL_HASH),
        kind: Some(ChannelKind::Broadcast),
        username: Some("purgeable".into()),
    });
    session.cache_peer(&PeerInfo::User {
        id: USER_ID,
        hash: Some(USER_HASH),
        is_self: false,
        username: Some("friend".into()),
        phone: None,
    });
    session
}

fn client() -> (Client, SenderPoolRunner) {
    let SenderPool { runner, handle } = SenderPool::new();
    let client = Client::new(handle, Config { session: session() });
    (client, runner)
}

/// Runs the pool until the future (which owns the last client) completes.
async fn drive<F: Future>(runner: SenderPoolRunner, connection: Recorder, call: F) -> F::Output {
    let (_, output) = tokio::join!(runner.run(connection), call);
    output
}

fn flags_word(body: &[u8]) -> u32 {
    u32::from_le_bytes(body[4..8].try_into().unwrap())
}

#[tokio::test]
async fn saved_messages_revoke_by_default() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let result = drive(runner, connection, async move {
        client.delete_messages("me", [10, 11]).await
    })
    .await;

    assert!(matches!(result, Ok(true)));
    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(flags_word(&sent[0]), 1);
    assert_eq!(
        decode(&sent[0]),
        Sent::Generic(tl::functions::messages::DeleteMessages {
            revoke: true,
            id: vec![10, 11],
        })
    );
}

#[tokio::test]
async fn channels_never_send_revoke() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let results = drive(runner, connection, async move {
        (
            client
                .delete_messages_with_revoke(-1001234567890i64, 42, false)
                .await,
            client
                .delete_messages_with_revoke("@Purgeable", 42, true)
                .await,
        )
    })
    .await;

    assert!(matches!(results, (Ok(true), Ok(true))));
    let sent = sent.lock().unwrap();
    let expected = tl::functions::channels::DeleteMessages {
        channel: tl::types::InputChannel {
            channel_id: CHANNEL_ID,
            access_hash: CHANNEL_HASH,
        }
        .into(),
        id: vec![42],
    };
    assert_eq!(*sent, vec![expected.to_bytes(), expected.to_bytes()]);
    assert_eq!(decode(&sent[0]), Sent::Channel(expected));
}

#[tokio::test]
async fn revoke_false_leaves_flag_absent() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let result = drive(runner, connection, async move {
        client
            .delete_messages_with_revoke(USER_ID, vec![7, 7, 3], false)
            .await
    })
    .await;

    assert!(matches!(result, Ok(true)));
    let sent = sent.lock().unwrap();
    assert_eq!(flags_word(&sent[0]), 0);
    assert_eq!(
        decode(&sent[0]),
        Sent::Generic(tl::functions::messages::DeleteMessages {
            revoke: false,
            id: vec![7, 7, 3],
        })
    );
}

#[tokio::test]
async fn small_groups_need_no_cache() {
    let SenderPool { runner, handle } = SenderPool::new();
    let client = Client::new(
        handle,
        Config {
            session: Arc::new(MemorySession::new()),
        },
    );
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let result = drive(runner, connection, async move {
        client.delete_messages(-42i64, 1).await
    })
    .await;

    assert!(matches!(result, Ok(true)));
    assert_eq!(
        decode(&sent.lock().unwrap()[0]),
        Sent::Generic(tl::functions::messages::DeleteMessages {
            revoke: true,
            id: vec![1],
        })
    );
}

#[tokio::test]
async fn single_id_matches_one_element_sequence() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    drive(runner, connection, async move {
        client.delete_messages("friend", 99).await.unwrap();
        client.delete_messages("friend", vec![99]).await.unwrap();
        client.delete_messages("friend", &[99][..]).await.unwrap();
    })
    .await;

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], sent[1]);
    assert_eq!(sent[0], sent[2]);
}

#[tokio::test]
async fn lazy_ids_keep_order_and_are_pulled_once() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);
    let pulled = Cell::new(0);

    let result = drive(runner, connection, async {
        let ids = [5, 3, 9]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect::<MessageIds>();
        let result = client.delete_messages("me", ids).await;
        drop(client);
        result
    })
    .await;

    assert!(matches!(result, Ok(true)));
    assert_eq!(pulled.get(), 3);
    assert_eq!(
        decode(&sent.lock().unwrap()[0]),
        Sent::Generic(tl::functions::messages::DeleteMessages {
            revoke: true,
            id: vec![5, 3, 9],
        })
    );
}

#[tokio::test]
async fn empty_ids_are_still_sent() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let result = drive(runner, connection, async move {
        client.delete_messages("me", Vec::new()).await
    })
    .await;

    assert!(matches!(result, Ok(true)));
    assert_eq!(
        decode(&sent.lock().unwrap()[0]),
        Sent::Generic(tl::functions::messages::DeleteMessages {
            revoke: true,
            id: Vec::new(),
        })
    );
}

#[tokio::test]
async fn rpc_errors_are_returned_unchanged() {
    let (client, runner) = client();
    let connection = Recorder::replying([Ok(rpc_error(403, "MESSAGE_DELETE_FORBIDDEN"))]);

    let result = drive(runner, connection, async move {
        client.delete_messages(-1001234567890i64, [1, 2]).await
    })
    .await;

    let error = result.unwrap_err();
    assert!(error.is("MESSAGE_DELETE_*"));
    match &error {
        DeleteMessagesError::Invocation(InvocationError::Rpc(rpc)) => assert_eq!(
            *rpc,
            RpcError {
                code: 403,
                name: "MESSAGE_DELETE_FORBIDDEN".into(),
                value: None,
                caused_by: Some(tl::functions::channels::DeleteMessages::CONSTRUCTOR_ID),
            }
        ),
        other => panic!("expected rpc error, got {other:?}"),
    }
    assert!(
        error
            .source()
            .and_then(|source| source.downcast_ref::<InvocationError>())
            .is_some()
    );
}

#[tokio::test]
async fn read_errors_are_returned_unchanged() {
    let (client, runner) = client();
    let connection = Recorder::replying([Err(ReadError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "connection lost",
    )))]);

    let result = drive(runner, connection, async move {
        client.delete_messages("me", 1).await
    })
    .await;

    match result {
        Err(DeleteMessagesError::Invocation(InvocationError::Read(ReadError::Io(error)))) => {
            assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
            assert_eq!(error.to_string(), "connection lost");
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_responses_fail_to_deserialize() {
    let (client, runner) = client();
    let connection = Recorder::replying([Ok(vec![0xef, 0xbe, 0xad, 0xde])]);

    let result = drive(runner, connection, async move {
        client.delete_messages("me", 1).await
    })
    .await;

    assert!(matches!(
        result,
        Err(DeleteMessagesError::Invocation(InvocationError::Read(
            ReadError::Deserialize(tl::deserialize::Error::UnexpectedConstructor {
                id: 0xdeadbeef
            })
        )))
    ));
}

#[tokio::test]
async fn unresolved_chats_send_nothing() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let results = drive(runner, connection, async move {
        (
            client.delete_messages("@nobody", 1).await,
            client.delete_messages(777000i64, 1).await,
            client.delete_messages(0i64, 1).await,
        )
    })
    .await;

    assert!(matches!(
        results.0,
        Err(DeleteMessagesError::Resolve(ResolveError::UsernameNotFound { ref username }))
            if username == "nobody"
    ));
    assert!(matches!(
        results.1,
        Err(DeleteMessagesError::Resolve(ResolveError::PeerNotCached { .. }))
    ));
    assert!(matches!(
        results.2,
        Err(DeleteMessagesError::Resolve(ResolveError::InvalidId { id: 0 }))
    ));
    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn stopped_pool_drops_requests() {
    let (client, runner) = client();
    drop(runner);

    assert!(matches!(
        client.delete_messages("me", 1).await,
        Err(DeleteMessagesError::Invocation(InvocationError::Dropped))
    ));
}

#[tokio::test]
async fn cancelled_deletions_are_never_sent() {
    let (client, runner) = client();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    // Queued on first poll, then dropped before the pool gets to run.
    tokio::select! {
        biased;
        _ = client.delete_messages("me", [1, 2, 3]) => panic!("nothing is running the pool yet"),
        _ = std::future::ready(()) => {}
    }
    drop(client);
    runner.run(connection).await;

    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn clones_share_the_pool() {
    let (client, runner) = client();
    let other = client.clone();
    let connection = Recorder::new();
    let sent = Arc::clone(&connection.sent);

    let results = drive(runner, connection, async move {
        tokio::join!(
            client.delete_messages("me", 1),
            other.delete_messages("friend", 2)
        )
    })
    .await;

    assert!(matches!(results, (Ok(true), Ok(true))));
    assert_eq!(sent.lock().unwrap().len(), 2);
}
