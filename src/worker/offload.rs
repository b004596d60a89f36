// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Background offload with owner-thread resumption.
//!
//! `Worker::submit` is the single offload pattern this crate provides: the
//! producer runs on the runtime's blocking pool, the consumer is scheduled
//! back onto the owner thread's local task queue. The owner thread never
//! waits for the background result; the post-offload half of a request is a
//! separately scheduled unit of work.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::TaskError;
use crate::observability::messages::worker::{OffloadCompleted, OffloadSubmitted};
use crate::observability::messages::StructuredLog;
use crate::worker::{Outcome, ThreadBound};

/// Offloads producers to the blocking pool and resumes consumers on the
/// owner thread.
///
/// Must be used from within the owner thread's `LocalSet`; `submit` schedules
/// the consumer with `spawn_local`, which panics outside a local context,
/// exactly the loud failure a misplaced call deserves.
///
/// No ordering is guaranteed between the consumers of two separate submits;
/// background completion times are independent. A caller that needs ordering
/// must serialize by submitting the second task from the first's consumer.
pub struct Worker {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl Worker {
    pub fn new() -> Self {
        Self {
            _not_send: std::marker::PhantomData,
        }
    }

    /// Run `produce` off the owner thread, then run `consume` with its
    /// [`Outcome`] back on the owner thread.
    ///
    /// `produce` is invoked exactly once, on a blocking-pool thread; its
    /// return value is passed unchanged to `consume`. A producer error, or a
    /// producer panic, arrives as [`Outcome::Failure`] through the same
    /// resumption path a success would take. `consume` is scheduled, never
    /// invoked synchronously: it runs only after the current owner-thread
    /// task has yielded.
    pub fn submit<T, P, C>(&self, produce: P, consume: C)
    where
        T: Send + 'static,
        P: FnOnce() -> Result<T, TaskError> + Send + 'static,
        C: FnOnce(Outcome<T>) + 'static,
    {
        OffloadSubmitted.log();

        let produced = tokio::task::spawn_blocking(produce);

        // Derive the success/failure continuation pair from the single
        // consumer through a single-shot slot, and bind both handles to this
        // thread before control leaves it. Whichever handle fires takes the
        // consumer out of the slot; the other can never run it again.
        let slot = Rc::new(RefCell::new(Some(consume)));
        let resolve = {
            let slot = Rc::clone(&slot);
            move |value: T| {
                let consume = slot.borrow_mut().take();
                if let Some(consume) = consume {
                    consume(Outcome::Success(value));
                }
            }
        };
        let reject = move |error: TaskError| {
            let consume = slot.borrow_mut().take();
            if let Some(consume) = consume {
                consume(Outcome::Failure(error));
            }
        };
        let completion = ThreadBound::new(resolve, reject);

        tokio::task::spawn_local(async move {
            let outcome = match produced.await {
                Ok(result) => result,
                // The blocking pool caught a producer panic.
                Err(join_error) => Err(TaskError::Panicked(join_error.to_string())),
            };
            match outcome {
                Ok(value) => {
                    OffloadCompleted { success: true }.log();
                    (completion.into_success_handle())(value);
                }
                Err(error) => {
                    OffloadCompleted { success: false }.log();
                    (completion.into_failure_handle())(error);
                }
            }
        });
    }
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}
