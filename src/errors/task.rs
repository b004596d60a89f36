// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure of an offloaded background computation.
///
/// Delivered to the owner thread inside [`crate::worker::Outcome::Failure`],
/// through the same resumption path a success value takes. The worker never
/// silently drops one of these.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The producer closure returned an error.
    #[error("background computation failed: {0}")]
    Failed(String),

    /// The producer closure panicked on the background thread.
    #[error("background computation panicked: {0}")]
    Panicked(String),
}
