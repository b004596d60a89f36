// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a plain struct carrying the event's fields. `Display`
//! renders the human-readable line; [`StructuredLog`] emits it through
//! `tracing` with the fields attached, and can open a span for the
//! surrounding unit of work.

use std::fmt::Display;
use tracing::Span;

pub mod backend;
pub mod dispatch;
pub mod transport;
pub mod worker;

/// Emit a message through `tracing`, with structured fields.
pub trait StructuredLog: Display {
    /// Log the event at its designated level.
    fn log(&self);

    /// Open a span for the unit of work this event begins.
    fn span(&self, name: &str) -> Span;
}
