// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TaskError;

/// Result of an offloaded computation, delivered back on the owner thread.
///
/// Success and failure travel through the same resumption path; the consumer
/// distinguishes them by variant, never by a separate callback.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(TaskError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn into_result(self) -> Result<T, TaskError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
