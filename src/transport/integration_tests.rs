// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Socket round trips through the full stack: listener → dispatcher →
//! worker/backends → response sink.

use std::rc::Rc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::LocalSet;

use crate::backends::stub::StubGuestRuntime;
use crate::backends::BackendRegistry;
use crate::context::{ServiceContext, ShutdownHandle};
use crate::dispatch::Dispatcher;
use crate::traits::{GuestRuntime, Lifecycle};
use crate::transport::serve;
use crate::worker::Worker;

fn dispatcher_with(shutdown: &ShutdownHandle) -> Rc<Dispatcher> {
    let runtime = Rc::new(StubGuestRuntime::new()) as Rc<dyn GuestRuntime>;
    let context = Rc::new(ServiceContext::new(
        BackendRegistry::new(runtime),
        Worker::new(),
        Rc::new(shutdown.clone()) as Rc<dyn Lifecycle>,
    ));
    Rc::new(Dispatcher::new(context))
}

async fn get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut client = TcpStream::connect(addr).await.expect("connect failed");
    client
        .write_all(format!("GET {path} HTTP/1.1\r\nConnection: close\r\n\r\n").as_bytes())
        .await
        .expect("write failed");
    let mut response = String::new();
    client
        .read_to_string(&mut response)
        .await
        .expect("read failed");
    response
}

#[tokio::test]
async fn offloaded_route_round_trips_over_a_socket() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let shutdown = ShutdownHandle::new();
            let dispatcher = dispatcher_with(&shutdown);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let server = tokio::task::spawn_local(serve(listener, dispatcher, shutdown.token()));

            let response = get(addr, "/java/5").await;
            assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(response.ends_with("\r\n\r\n120\n"));

            shutdown.terminate();
            server.await.unwrap().unwrap();
        })
        .await;
}

#[tokio::test]
async fn quit_route_answers_then_stops_the_listener() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let shutdown = ShutdownHandle::new();
            let dispatcher = dispatcher_with(&shutdown);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let server = tokio::task::spawn_local(serve(listener, dispatcher, shutdown.token()));

            let response = get(addr, "/quit").await;
            assert!(response.contains("Quiting...\n"));

            // The accept loop observed the cancellation and wound down.
            tokio::time::timeout(Duration::from_secs(5), server)
                .await
                .expect("listener did not stop")
                .unwrap()
                .unwrap();
        })
        .await;
}

#[tokio::test]
async fn echo_route_round_trips_over_a_socket() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let shutdown = ShutdownHandle::new();
            let dispatcher = dispatcher_with(&shutdown);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let server = tokio::task::spawn_local(serve(listener, dispatcher, shutdown.token()));

            let response = get(addr, "/HelloMaven!").await;
            assert!(response.contains("Received: /HelloMaven!\n"));

            shutdown.terminate();
            server.await.unwrap().unwrap();
        })
        .await;
}
