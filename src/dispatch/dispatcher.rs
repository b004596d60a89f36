// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The single-threaded request dispatcher.
//!
//! `handle` runs once per inbound request, always on the owner thread, and
//! never blocks: synchronous routes compute inline and end the sink before
//! returning; the offloaded route hands a producer to the worker and ends
//! the sink from the scheduled consumer. Either way, every request ends its
//! sink exactly once.

use std::rc::Rc;

use crate::backends::native;
use crate::context::ServiceContext;
use crate::dispatch::Route;
use crate::observability::messages::dispatch::{
    InvalidComputeArgument, RequestReceived, ShutdownRequested,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Request, ResponseSink};
use crate::worker::Outcome;

/// Farewell body for the shutdown route. The spelling is part of the wire
/// protocol; clients match it verbatim.
const QUIT_BODY: &str = "Quiting...\n";

pub struct Dispatcher {
    context: Rc<ServiceContext>,
}

impl Dispatcher {
    pub fn new(context: Rc<ServiceContext>) -> Self {
        Self { context }
    }

    /// Route one request and perform its single write-and-end.
    ///
    /// Must be called from within the owner thread's `LocalSet`; the
    /// offloaded route schedules its completion there.
    pub fn handle(&self, request: Request, sink: Box<dyn ResponseSink>) {
        let received = RequestReceived {
            route_key: request.route_key(),
        };
        let span = received.span("request_dispatch");
        let _guard = span.enter();
        received.log();

        match Route::parse(request.route_key()) {
            Route::Quit => {
                sink.end(QUIT_BODY);
                ShutdownRequested.log();
                self.context.lifecycle().terminate();
            }
            Route::Compute { backend, argument } if backend.offloaded() => {
                // Fire the CPU-bound producer off-thread; the consumer runs
                // back here, after this handler has returned.
                self.context.worker().submit(
                    move || Ok(native::factorial(argument)),
                    move |outcome| match outcome {
                        Outcome::Success(value) => sink.end(&format!("{value}\n")),
                        Outcome::Failure(error) => {
                            sink.end(&format!("Computation failed: {error}\n"))
                        }
                    },
                );
            }
            Route::Compute { backend, argument } => {
                match self.context.backends().compute(backend, argument) {
                    Ok(value) => sink.end(&format!("{value}\n")),
                    Err(error) => sink.end(&format!("Computation failed: {error}\n")),
                }
            }
            Route::InvalidArgument { .. } => {
                InvalidComputeArgument {
                    route_key: request.route_key(),
                }
                .log();
                sink.end(&format!("Invalid argument: {}\n", request.route_key()));
            }
            Route::Echo => {
                sink.end(&format!("Received: {}\n", request.route_key()));
            }
        }
    }
}
