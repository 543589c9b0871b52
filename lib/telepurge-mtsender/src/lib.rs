// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library funnels the serialized requests made through any number of
//! [`SenderPoolHandle`]s into a single [`Connection`], driven by the
//! [`SenderPoolRunner`].
//!
//! The connection itself (encryption, sockets, datacenters) is outside the
//! scope of this crate: anything able to turn a request body into a response
//! body can be plugged in.
mod errors;
mod sender_pool;

pub use errors::{InvocationError, ReadError, RpcError};
pub use sender_pool::{SenderPool, SenderPoolHandle, SenderPoolRunner};

/// A channel to Telegram able to answer one request at a time.
pub trait Connection: Send {
    /// Send the serialized request and wait for the serialized response.
    ///
    /// Responses carrying an `rpc_error` are returned as-is; the runner takes
    /// care of turning them into [`InvocationError::Rpc`].
    fn call(
        &mut self,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, ReadError>> + Send;
}
