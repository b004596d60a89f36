// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // computation backends
pub mod config;     // service configuration
pub mod context;    // per-process service context
pub mod dispatch;   // request router + dispatcher
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // collaborator seams
pub mod transport;  // minimal HTTP listener
pub mod worker;     // background offload + thread-affine completion
