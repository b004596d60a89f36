// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for computation-backend operations.
//!
//! Covers guest-snippet evaluation, the cast to the callable capability, and
//! invocation of a resolved callable. All errors implement
//! `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Error type for all computation-backend operations.
///
/// Resolution faults surface at first use of a backend variant and are not
/// retried automatically; the variant's cache slot stays empty so a later
/// request attempts resolution again.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The embedded runtime failed to evaluate a guest snippet.
    #[error("evaluation failed for {language_id}: {message}")]
    Evaluation {
        language_id: String,
        message: String,
    },

    /// Evaluation succeeded but the resulting value was not callable.
    #[error("evaluated {language_id} value is not callable")]
    NotCallable { language_id: String },

    /// A resolved guest callable failed during invocation.
    #[error("guest invocation failed: {0}")]
    Invocation(String),

    /// The guest returned a value the caller's type rules cannot interpret.
    #[error("unexpected guest result: {0}")]
    UnexpectedResult(String),
}
