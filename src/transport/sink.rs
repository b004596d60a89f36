// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;

use crate::observability::messages::transport::ConnectionFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::ResponseSink;

/// Production [`ResponseSink`]: one minimal HTTP/1.1 response per request.
///
/// `end` is synchronous, as the dispatcher contract requires, so the
/// actual write is scheduled on the owner thread's local queue. The sink
/// owns the write half of the connection; dropping the read half elsewhere
/// does not disturb an in-flight response.
pub struct TcpResponseSink {
    writer: OwnedWriteHalf,
}

impl TcpResponseSink {
    pub fn new(writer: OwnedWriteHalf) -> Self {
        Self { writer }
    }
}

impl ResponseSink for TcpResponseSink {
    fn end(self: Box<Self>, body: &str) {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let mut writer = self.writer;
        tokio::task::spawn_local(async move {
            if let Err(error) = writer.write_all(response.as_bytes()).await {
                ConnectionFailed { error: &error }.log();
                return;
            }
            let _ = writer.shutdown().await;
        });
    }
}
