// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Owner-thread accept loop.
//!
//! Deliberately thin: the transport is a collaborator of the core, not part
//! of it. It reads one request line per connection, hands the dispatcher a
//! [`Request`] and a [`TcpResponseSink`], and gets out of the way. All
//! connection tasks run on the owner thread's `LocalSet`; nothing here ever
//! waits for a background computation.

use std::rc::Rc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use crate::dispatch::Dispatcher;
use crate::errors::TransportError;
use crate::observability::messages::transport::{ConnectionFailed, ListenerStarted};
use crate::observability::messages::StructuredLog;
use crate::traits::Request;
use crate::transport::TcpResponseSink;

/// Accept connections until the shutdown token fires.
///
/// Must run inside the owner thread's `LocalSet`. Responses scheduled just
/// before shutdown (the farewell of `/quit` in particular) are local tasks;
/// drive the `LocalSet` to completion after this returns to flush them.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Rc<Dispatcher>,
    shutdown: CancellationToken,
) -> Result<(), TransportError> {
    ListenerStarted {
        addr: listener.local_addr()?,
    }
    .log();

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _peer)) => {
                        let dispatcher = Rc::clone(&dispatcher);
                        tokio::task::spawn_local(async move {
                            if let Err(error) = serve_connection(stream, dispatcher).await {
                                ConnectionFailed { error: &error }.log();
                            }
                        });
                    }
                    Err(error) => {
                        ConnectionFailed { error: &error }.log();
                    }
                }
            }
        }
    }
    Ok(())
}

async fn serve_connection(
    stream: TcpStream,
    dispatcher: Rc<Dispatcher>,
) -> Result<(), TransportError> {
    let (read_half, write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let route_key = parse_request_line(&request_line)?;

    // Drain the headers so the peer sees an orderly close instead of a
    // reset for unread bytes.
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).await?;
        if read == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    dispatcher.handle(
        Request::new(route_key),
        Box::new(TcpResponseSink::new(write_half)),
    );
    Ok(())
}

fn parse_request_line(line: &str) -> Result<String, TransportError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("GET"), Some(path)) => Ok(path.to_string()),
        _ => Err(TransportError::MalformedRequestLine(
            line.trim_end().to_string(),
        )),
    }
}
