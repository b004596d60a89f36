// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::rc::Rc;

use tokio::net::TcpListener;
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use the_switchboard::backends::stub::StubGuestRuntime;
use the_switchboard::backends::BackendRegistry;
use the_switchboard::config::{load_and_validate_config, ServiceConfig};
use the_switchboard::context::{ServiceContext, ShutdownHandle};
use the_switchboard::dispatch::Dispatcher;
use the_switchboard::traits::{GuestRuntime, Lifecycle};
use the_switchboard::transport;
use the_switchboard::worker::Worker;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)?,
        None => ServiceConfig::default(),
    };

    // The owner thread: one current-thread runtime driving a LocalSet. The
    // runtime's blocking pool is the background pool the worker offloads to.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .max_blocking_threads(config.max_blocking_threads())
        .build()?;

    let local = LocalSet::new();
    runtime.block_on(local.run_until(run(config)))?;
    // Flush local tasks scheduled just before shutdown (the farewell
    // response of /quit among them).
    runtime.block_on(local);
    Ok(())
}

async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let shutdown = ShutdownHandle::new();

    // An embedded interpreter would be integrated here; the stub runtime
    // serves the same contract in-process.
    let guest_runtime = Rc::new(StubGuestRuntime::new()) as Rc<dyn GuestRuntime>;

    let context = Rc::new(ServiceContext::new(
        BackendRegistry::new(guest_runtime),
        Worker::new(),
        Rc::new(shutdown.clone()) as Rc<dyn Lifecycle>,
    ));
    let dispatcher = Rc::new(Dispatcher::new(context));

    let listener = TcpListener::bind(config.listen_addr()?).await?;
    transport::serve(listener, dispatcher, shutdown.token()).await?;
    Ok(())
}
