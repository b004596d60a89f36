// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod listener;
mod sink;

#[cfg(test)]
mod integration_tests;

pub use listener::serve;
pub use sink::TcpResponseSink;
