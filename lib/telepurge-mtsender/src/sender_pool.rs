// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Connection, InvocationError, RpcError};
use log::{debug, trace};
use telepurge_tl_types::{self as tl, Deserializable, Identifiable};
use tokio::sync::{mpsc, oneshot};

type InvokeResponse = Vec<u8>;

enum Request {
    Invoke {
        body: Vec<u8>,
        tx: oneshot::Sender<Result<InvokeResponse, InvocationError>>,
    },
    Quit,
}

#[derive(Clone)]
pub struct SenderPoolHandle(mpsc::UnboundedSender<Request>);

pub struct SenderPool {
    pub runner: SenderPoolRunner,
    pub handle: SenderPoolHandle,
}

pub struct SenderPoolRunner {
    request_rx: mpsc::UnboundedReceiver<Request>,
}

impl SenderPoolHandle {
    /// Send the serialized request body and wait for the serialized response.
    ///
    /// Dropping the returned future before the runner picks the request up
    /// prevents it from being sent at all.
    pub async fn invoke(&self, body: Vec<u8>) -> Result<InvokeResponse, InvocationError> {
        let (tx, rx) = oneshot::channel();
        self.0
            .send(Request::Invoke { body, tx })
            .map_err(|_| InvocationError::Dropped)?;
        rx.await.map_err(|_| InvocationError::Dropped)?
    }

    pub fn quit(&self) -> bool {
        self.0.send(Request::Quit).is_ok()
    }
}

impl SenderPool {
    pub fn new() -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();

        Self {
            runner: SenderPoolRunner { request_rx },
            handle: SenderPoolHandle(request_tx),
        }
    }
}

impl Default for SenderPool {
    fn default() -> Self {
        Self::new()
    }
}

impl SenderPoolRunner {
    /// Run the sender pool until [`crate::SenderPoolHandle::quit`] is called,
    /// or every handle is dropped.
    ///
    /// Requests are forwarded to the connection one at a time, in the order
    /// they were made.
    pub async fn run<C: Connection>(self, mut connection: C) {
        let Self { mut request_rx } = self;

        while let Some(request) = request_rx.recv().await {
            match request {
                Request::Invoke { body, tx } => {
                    let constructor_id = request_constructor_id(&body);
                    let name = constructor_id.map_or("(empty)", tl::name_for_id);
                    if tx.is_closed() {
                        debug!("skipping {name}, the caller is no longer waiting for it");
                        continue;
                    }

                    trace!("sending {name} ({} bytes)", body.len());
                    let result = match connection.call(body).await {
                        Ok(response) => check_rpc_error(constructor_id, response),
                        Err(err) => {
                            debug!("connection failed to complete {name}: {err}");
                            Err(err.into())
                        }
                    };
                    let _ = tx.send(result);
                }
                Request::Quit => break,
            }
        }
    }
}

fn request_constructor_id(body: &[u8]) -> Option<u32> {
    let id = body.get(..4)?;
    Some(u32::from_le_bytes([id[0], id[1], id[2], id[3]]))
}

fn check_rpc_error(
    caused_by: Option<u32>,
    response: Vec<u8>,
) -> Result<InvokeResponse, InvocationError> {
    if !response.starts_with(&tl::types::RpcError::CONSTRUCTOR_ID.to_le_bytes()) {
        return Ok(response);
    }

    let mut error = RpcError::from(tl::types::RpcError::from_bytes(&response[4..])?);
    if let Some(constructor_id) = caused_by {
        error = error.with_caused_by(constructor_id);
    }
    debug!("server replied with {error}");
    Err(InvocationError::Rpc(error))
}
