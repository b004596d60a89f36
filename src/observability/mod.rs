// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through centralized message types: one struct
//! per event, implementing `Display` for the human-readable line and
//! [`messages::StructuredLog`] for the `tracing` fields. This keeps magic
//! strings out of the code paths and gives every subsystem a consistent log
//! shape.
//!
//! Messages are organized by subsystem:
//! * `messages::backend` - backend resolution and computation events
//! * `messages::dispatch` - request routing and response events
//! * `messages::transport` - listener lifecycle and connection events
//! * `messages::worker` - offload submission and completion events

pub mod messages;
