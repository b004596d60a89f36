// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod guest;
pub mod lifecycle;
pub mod transport;

pub use guest::{GuestFunction, GuestRuntime, GuestValue};
pub use lifecycle::Lifecycle;
pub use transport::{Request, ResponseSink};
