// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default listen address for the service.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
/// Default size of the blocking pool executing offloaded producers.
pub const DEFAULT_MAX_BLOCKING_THREADS: usize = 4;
