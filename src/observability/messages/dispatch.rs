// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for request routing and dispatch events.
//!
//! This module contains message types for logging events related to:
//! * Inbound request handling
//! * Shutdown requests
//! * Caller input-validation failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An inbound request reached the dispatcher.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_switchboard::observability::messages::dispatch::RequestReceived;
///
/// let msg = RequestReceived { route_key: "/java/5" };
/// tracing::info!("{}", msg);
/// ```
pub struct RequestReceived<'a> {
    pub route_key: &'a str,
}

impl Display for RequestReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request received: {}", self.route_key)
    }
}

impl StructuredLog for RequestReceived<'_> {
    fn log(&self) {
        tracing::info!(route_key = self.route_key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("request", span_name = name, route_key = self.route_key)
    }
}

/// The shutdown route fired; process termination begins.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ShutdownRequested;

impl Display for ShutdownRequested {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str("Shutdown requested; no further requests will be dispatched")
    }
}

impl StructuredLog for ShutdownRequested {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("shutdown", span_name = name)
    }
}

/// A compute route carried a non-numeric argument.
///
/// # Log Level
/// `warn!` - Caller error, answered deterministically
pub struct InvalidComputeArgument<'a> {
    pub route_key: &'a str,
}

impl Display for InvalidComputeArgument<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid compute argument in route: {}", self.route_key)
    }
}

impl StructuredLog for InvalidComputeArgument<'_> {
    fn log(&self) {
        tracing::warn!(route_key = self.route_key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "invalid_argument",
            span_name = name,
            route_key = self.route_key,
        )
    }
}
