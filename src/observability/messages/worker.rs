// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for offload-worker events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A producer was handed to the blocking pool.
///
/// # Log Level
/// `debug!` - High-frequency diagnostic event
pub struct OffloadSubmitted;

impl Display for OffloadSubmitted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str("Offload submitted to the blocking pool")
    }
}

impl StructuredLog for OffloadSubmitted {
    fn log(&self) {
        tracing::debug!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("offload", span_name = name)
    }
}

/// An offloaded computation resumed on the owner thread.
///
/// # Log Level
/// `debug!` on success, `warn!` on failure
pub struct OffloadCompleted {
    pub success: bool,
}

impl Display for OffloadCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.success {
            f.write_str("Offload completed, consumer scheduled on owner thread")
        } else {
            f.write_str("Offload failed, failure delivered to owner thread")
        }
    }
}

impl StructuredLog for OffloadCompleted {
    fn log(&self) {
        if self.success {
            tracing::debug!(success = self.success, "{}", self);
        } else {
            tracing::warn!(success = self.success, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "offload_completed",
            span_name = name,
            success = self.success,
        )
    }
}
