// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;
use telepurge_mtsender::InvocationError;
use telepurge_session::ResolveError;

/// This error occurs when deleting messages fails.
///
/// Both variants carry the error exactly as the session or the sender
/// reported it.
#[derive(Debug)]
pub enum DeleteMessagesError {
    /// The chat could not be resolved, so nothing was sent.
    Resolve(ResolveError),

    /// The request was sent but did not succeed.
    Invocation(InvocationError),
}

impl Error for DeleteMessagesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolve(e) => Some(e),
            Self::Invocation(e) => Some(e),
        }
    }
}

impl fmt::Display for DeleteMessagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(e) => write!(f, "delete messages error, bad chat: {e}"),
            Self::Invocation(e) => write!(f, "delete messages error, bad invoke: {e}"),
        }
    }
}

impl From<ResolveError> for DeleteMessagesError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}

impl From<InvocationError> for DeleteMessagesError {
    fn from(e: InvocationError) -> Self {
        Self::Invocation(e)
    }
}

impl DeleteMessagesError {
    /// Matches on the name of the RPC error, if that is what caused the failure.
    ///
    /// See [`InvocationError::is`] for the accepted patterns.
    pub fn is(&self, rpc_error: &str) -> bool {
        match self {
            Self::Invocation(e) => e.is(rpc_error),
            Self::Resolve(_) => false,
        }
    }
}
