// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod backend;
mod config;
mod task;
mod transport;

pub use backend::BackendError;
pub use config::ConfigError;
pub use task::TaskError;
pub use transport::TransportError;
