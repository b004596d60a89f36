// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Transport-facing data types: the inbound request and the write-once
//! response sink. The transport collaborator owns listening and accepting;
//! the dispatcher only ever sees these two.

/// One inbound request: an opaque route key, parsed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    route_key: String,
}

impl Request {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
        }
    }

    pub fn route_key(&self) -> &str {
        &self.route_key
    }
}

/// Write-once output channel, 1:1 with a [`Request`].
///
/// `end` is the terminal operation. The receiver consumes the sink, so a
/// second end does not type-check. Writing after end is not an error path
/// this design recovers from, it is one it rules out.
pub trait ResponseSink {
    fn end(self: Box<Self>, body: &str);
}
