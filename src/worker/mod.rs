// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod offload;
mod outcome;
mod thread_bound;

#[cfg(test)]
mod integration_tests;

pub use offload::Worker;
pub use outcome::Outcome;
pub use thread_bound::ThreadBound;
