// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Process-lifecycle collaborator.
///
/// The shutdown route calls [`Lifecycle::terminate`] exactly once; after
/// termination begins, no further requests are dispatched.
pub trait Lifecycle {
    fn terminate(&self);
}
