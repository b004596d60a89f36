// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dispatcher;
mod router;


pub use dispatcher::Dispatcher;
pub use router::{Route, QUIT_ROUTE};
