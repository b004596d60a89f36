// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the listener and connection handling.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tracing::Span;

/// The listener is bound and accepting.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ListenerStarted {
    pub addr: SocketAddr,
}

impl Display for ListenerStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Listening on http://{}/", self.addr)
    }
}

impl StructuredLog for ListenerStarted {
    fn log(&self) {
        tracing::info!(addr = %self.addr, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("listener", span_name = name, addr = %self.addr)
    }
}

/// A connection could not be served.
///
/// # Log Level
/// `warn!` - Per-connection fault, listener keeps accepting
pub struct ConnectionFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ConnectionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connection failed: {}", self.error)
    }
}

impl StructuredLog for ConnectionFailed<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("connection_failed", span_name = name)
    }
}
