// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Thread-affinity guard for continuation handles.
//!
//! Continuation handles handed out by an embedded runtime are frequently
//! unsafe to invoke from an arbitrary thread. `ThreadBound` wraps the
//! success/failure pair together with the identity of the thread that created
//! it and loudly refuses to release either handle anywhere else. A
//! cross-thread access is a broken offload contract, a programming error, not
//! a recoverable condition, so the guard panics instead of returning a
//! `Result`.
//!
//! The accessors consume the guard, so at most one of the two handles can
//! ever be extracted: either the success continuation or the failure
//! continuation runs, never both.

use std::thread::{self, ThreadId};

/// Binds a success handle and a failure handle to the constructing thread.
pub struct ThreadBound<S, F> {
    success: S,
    failure: F,
    owner: ThreadId,
}

impl<S, F> ThreadBound<S, F> {
    /// Record the current thread as the owner of both handles.
    pub fn new(success: S, failure: F) -> Self {
        Self {
            success,
            failure,
            owner: thread::current().id(),
        }
    }

    /// The thread that constructed this guard.
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    /// Release the success handle.
    ///
    /// # Panics
    /// If called from any thread other than the constructing one.
    pub fn into_success_handle(self) -> S {
        self.verify_owner();
        self.success
    }

    /// Release the failure handle.
    ///
    /// # Panics
    /// If called from any thread other than the constructing one.
    pub fn into_failure_handle(self) -> F {
        self.verify_owner();
        self.failure
    }

    fn verify_owner(&self) {
        let current = thread::current().id();
        assert_eq!(
            current, self.owner,
            "thread-bound handle accessed from {current:?}, owned by {:?}",
            self.owner
        );
    }
}
