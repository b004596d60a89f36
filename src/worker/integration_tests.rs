// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integration tests for the offload worker: thread placement, value
//! transfer, failure propagation, and scheduling order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use tokio::sync::oneshot;
use tokio::task::LocalSet;

use crate::errors::TaskError;
use crate::worker::{Outcome, Worker};

/// Run one submit on a fresh `LocalSet` and hand back what the consumer saw.
async fn run_offload<T, P>(produce: P) -> (Outcome<T>, ThreadId)
where
    T: Send + 'static,
    P: FnOnce() -> Result<T, TaskError> + Send + 'static,
{
    let local = LocalSet::new();
    local
        .run_until(async move {
            let worker = Worker::new();
            let (tx, rx) = oneshot::channel();
            worker.submit(produce, move |outcome| {
                let _ = tx.send((outcome, thread::current().id()));
            });
            rx.await.expect("consumer never ran")
        })
        .await
}

#[tokio::test]
async fn producer_runs_off_the_owner_thread() {
    let owner = thread::current().id();
    let (outcome, _) = run_offload(move || {
        assert_ne!(
            thread::current().id(),
            owner,
            "producer must not run on the owner thread"
        );
        Ok(thread::current().id())
    })
    .await;

    let producer_thread = outcome.into_result().expect("producer failed");
    assert_ne!(producer_thread, owner);
}

#[tokio::test]
async fn consumer_runs_on_the_owner_thread() {
    let owner = thread::current().id();
    let (_, consumer_thread) = run_offload(|| Ok(7_u32)).await;
    assert_eq!(consumer_thread, owner);
}

#[tokio::test]
async fn produced_value_is_passed_unchanged() {
    let (outcome, _) = run_offload(|| Ok(vec![1_u64, 2, 3])).await;
    assert_eq!(outcome.into_result().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn consumer_never_runs_before_the_producer_returns() {
    let produced = Arc::new(AtomicBool::new(false));
    let observed = Arc::clone(&produced);

    let (outcome, _) = run_offload(move || {
        // Give the scheduler every chance to misbehave.
        thread::sleep(std::time::Duration::from_millis(20));
        produced.store(true, Ordering::SeqCst);
        Ok(())
    })
    .await;

    assert!(outcome.is_success());
    assert!(
        observed.load(Ordering::SeqCst),
        "consumer observed state from before the producer returned"
    );
}

#[tokio::test]
async fn producer_error_arrives_as_failure_outcome() {
    let (outcome, _) = run_offload::<u32, _>(|| Err(TaskError::Failed("nope".into()))).await;
    match outcome {
        Outcome::Failure(TaskError::Failed(message)) => assert_eq!(message, "nope"),
        other => panic!("expected Failure(Failed), got {other:?}"),
    }
}

#[tokio::test]
async fn producer_panic_arrives_as_failure_outcome() {
    let (outcome, consumer_thread) =
        run_offload::<u32, _>(|| panic!("deliberate test panic")).await;
    assert_eq!(consumer_thread, thread::current().id());
    match outcome {
        Outcome::Failure(TaskError::Panicked(_)) => {}
        other => panic!("expected Failure(Panicked), got {other:?}"),
    }
}

#[tokio::test]
async fn consumer_is_scheduled_not_invoked_synchronously() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let worker = Worker::new();
            let (tx, mut rx) = oneshot::channel();
            worker.submit(
                || Ok(()),
                move |_| {
                    let _ = tx.send(());
                },
            );
            // submit returned without yielding; a synchronously invoked
            // consumer would already have filled the channel.
            assert!(
                rx.try_recv().is_err(),
                "consumer ran inside submit instead of being scheduled"
            );
            rx.await.expect("consumer never ran");
        })
        .await;
}
