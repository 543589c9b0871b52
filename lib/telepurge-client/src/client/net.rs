// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use log::trace;
use telepurge_mtsender::{InvocationError, SenderPoolHandle};
use telepurge_session::Session;
use telepurge_tl_types::{self as tl, Deserializable, Serializable};

use super::{Client, ClientInner, Config};

/// Method implementations directly related with network connectivity.
impl Client {
    /// Creates a new client sending its requests through the given handle.
    ///
    /// The [`telepurge_mtsender::SenderPoolRunner`] owning the other end must be running
    /// for any request to complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use telepurge_client::{Client, Config, SenderPool};
    /// use telepurge_client::session::MemorySession;
    ///
    /// let SenderPool { runner, handle } = SenderPool::new();
    /// let client = Client::new(handle, Config {
    ///     session: Arc::new(MemorySession::new()),
    /// });
    /// # drop((runner, client));
    /// ```
    pub fn new(handle: SenderPoolHandle, config: Config) -> Self {
        let Config { session } = config;
        Self(Arc::new(ClientInner { session, handle }))
    }

    /// The session used to resolve chat references.
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.0.session
    }

    /// Invoke a raw API call. This directly sends the request to Telegram's servers.
    ///
    /// Using function definitions corresponding to a different layer is likely to cause the
    /// responses to the request to not be understood.
    ///
    /// Errors are returned as they occur; nothing is retried.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: telepurge_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use telepurge_client::tl;
    ///
    /// dbg!(client.invoke(&tl::functions::messages::DeleteMessages {
    ///     revoke: true,
    ///     id: vec![123],
    /// }).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: tl::RemoteCall>(
        &self,
        request: &R,
    ) -> Result<R::Return, InvocationError> {
        let body = request.to_bytes();
        trace!("invoking request of {} bytes", body.len());
        self.0
            .handle
            .invoke(body)
            .await
            .and_then(|body| R::Return::from_bytes(&body).map_err(|e| e.into()))
    }
}
