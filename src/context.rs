// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-process service context.
//!
//! One instance is built at startup and passed by `Rc` to everything that
//! needs the shared services: the explicit replacement for a process-wide
//! static accessor. The context is `!Send` by construction (the backend
//! registry is owner-thread-only), so it can never leave the owner thread.

use std::rc::Rc;

use tokio_util::sync::CancellationToken;

use crate::backends::BackendRegistry;
use crate::traits::Lifecycle;
use crate::worker::Worker;

/// The shared services of one process: computation backends, the offload
/// worker, and the process-lifecycle handle.
pub struct ServiceContext {
    backends: BackendRegistry,
    worker: Worker,
    lifecycle: Rc<dyn Lifecycle>,
}

impl ServiceContext {
    pub fn new(backends: BackendRegistry, worker: Worker, lifecycle: Rc<dyn Lifecycle>) -> Self {
        Self {
            backends,
            worker,
            lifecycle,
        }
    }

    pub fn backends(&self) -> &BackendRegistry {
        &self.backends
    }

    pub fn worker(&self) -> &Worker {
        &self.worker
    }

    pub fn lifecycle(&self) -> &dyn Lifecycle {
        self.lifecycle.as_ref()
    }
}

/// Production [`Lifecycle`]: termination cancels a token the accept loop
/// selects on.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    token: CancellationToken,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// The token the transport watches for shutdown.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Lifecycle for ShutdownHandle {
    fn terminate(&self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminate_cancels_the_token() {
        let handle = ShutdownHandle::new();
        let token = handle.token();
        assert!(!token.is_cancelled());
        handle.terminate();
        assert!(token.is_cancelled());
    }

    #[test]
    fn terminate_is_idempotent() {
        let handle = ShutdownHandle::new();
        handle.terminate();
        handle.terminate();
        assert!(handle.token().is_cancelled());
    }
}
