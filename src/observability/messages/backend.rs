// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for computation-backend events.
//!
//! This module contains message types for logging events related to:
//! * Lazy resolution of guest callables
//! * Resolution failures (evaluation or capability cast)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A guest variant's callable was resolved and cached.
///
/// # Log Level
/// `info!` - Important operational event; happens once per variant.
pub struct BackendResolved<'a> {
    pub language_id: &'a str,
}

impl Display for BackendResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Backend '{}' resolved and cached", self.language_id)
    }
}

impl StructuredLog for BackendResolved<'_> {
    fn log(&self) {
        tracing::info!(language_id = self.language_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "backend_resolution",
            span_name = name,
            language_id = self.language_id,
        )
    }
}

/// A guest variant failed to resolve.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct BackendResolutionFailed<'a> {
    pub language_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BackendResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Backend '{}' failed to resolve: {}",
            self.language_id, self.error
        )
    }
}

impl StructuredLog for BackendResolutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            language_id = self.language_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "backend_resolution_failed",
            span_name = name,
            language_id = self.language_id,
        )
    }
}
