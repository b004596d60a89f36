// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by the minimal HTTP listener.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Socket-level failure (bind, accept, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The client sent something that is not a recognizable request line.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}
