//! This example deletes messages from a chat, against a loopback connection
//! that acknowledges every request instead of talking to Telegram.
//!
//! The chat can be `me`, a cached username, or a dialog identifier. The demo
//! session knows about the channel `-1001234567890` (`@purgeable`).
//!
//! ```sh
//! cargo run --example delete -- -1001234567890 42 43
//! cargo run --example delete -- me 10 11
//! ```

use std::env;
use std::sync::Arc;

use log::info;
use simple_logger::SimpleLogger;
use telepurge_client::sender::{Connection, ReadError};
use telepurge_client::session::{ChannelKind, ChatRef, MemorySession, PeerInfo, Session};
use telepurge_client::tl::{self, Serializable};
use telepurge_client::types::MessageIds;
use telepurge_client::{Client, Config, SenderPool};
use tokio::runtime;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

/// Pretends every message was deleted.
struct Loopback;

impl Connection for Loopback {
    fn call(
        &mut self,
        body: Vec<u8>,
    ) -> impl Future<Output = std::result::Result<Vec<u8>, ReadError>> + Send {
        info!("would send {} bytes to Telegram", body.len());
        async move {
            Ok(tl::enums::messages::AffectedMessages::from(
                tl::types::messages::AffectedMessages {
                    pts: 1,
                    pts_count: 1,
                },
            )
            .to_bytes())
        }
    }
}

async fn async_main() -> Result {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let mut args = env::args().skip(1);
    let chat = args.next().unwrap_or_else(|| "me".to_string());
    let chat = match chat.parse::<i64>() {
        Ok(id) => ChatRef::Id(id),
        Err(_) => ChatRef::Handle(chat),
    };
    let message_ids = args
        .map(|id| id.parse::<i32>())
        .collect::<std::result::Result<MessageIds, _>>()?;

    let session = Arc::new(MemorySession::new());
    session.cache_peer(&PeerInfo::Channel {
        id: 1234567890,
        hash: Some(-4242),
        kind: Some(ChannelKind::Broadcast),
        username: Some("purgeable".into()),
    });

    let SenderPool { runner, handle } = SenderPool::new();
    let client = Client::new(handle, Config { session });

    let (_, deleted) = tokio::join!(runner.run(Loopback), async move {
        // The pool stops once the last client is dropped at the end of this block.
        client.delete_messages(chat, message_ids).await
    });

    println!("Deleted: {}", deleted?);
    Ok(())
}

fn main() -> Result {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main())
}
