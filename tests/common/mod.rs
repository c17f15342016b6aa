// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Synthetic legacy ping servers for integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use mcpinger::{STATUS_REQUEST, encode_status_response};

/// How a synthetic server treats each accepted connection
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Read the handshake, answer with a well-formed status response
    Status(String),
    /// Accept, read the handshake, then close without writing anything
    CloseImmediately,
    /// Answer with a wrong packet kind byte
    WrongPacketId,
    /// Declare a zero-length payload
    ZeroLength,
    /// Send only a prefix of a valid response, then close
    Truncate(String, usize),
    /// Accept and hold the socket open without ever answering
    Silent,
}

/// Handle to a running synthetic server.
///
/// Applies one behavior per accepted connection, repeating the last
/// behavior once the list is exhausted.
pub struct TestServer {
    pub addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start(behaviors: Vec<Behavior>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let seen = connections.clone();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let n = seen.fetch_add(1, Ordering::SeqCst);
                let behavior = behaviors
                    .get(n)
                    .or_else(|| behaviors.last())
                    .cloned()
                    .unwrap_or(Behavior::CloseImmediately);
                tokio::spawn(serve_connection(stream, behavior));
            }
        });

        Self {
            addr,
            connections,
            handle,
        }
    }

    /// Cache key for this server
    pub fn key(&self) -> String {
        self.addr.to_string()
    }

    /// Number of connections accepted so far
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection(mut stream: TcpStream, behavior: Behavior) {
    let mut handshake = [0u8; 2];
    if stream.read_exact(&mut handshake).await.is_err() {
        return;
    }

    match behavior {
        Behavior::Status(payload) => {
            // Only a correct handshake earns a response
            if handshake == STATUS_REQUEST {
                let _ = stream.write_all(&encode_status_response(&payload)).await;
            }
        }
        Behavior::CloseImmediately => {}
        Behavior::WrongPacketId => {
            let _ = stream.write_all(&[0x2A, 0x00, 0x01, 0x00, 0x41]).await;
        }
        Behavior::ZeroLength => {
            let _ = stream.write_all(&[0xFF, 0x00, 0x00]).await;
        }
        Behavior::Truncate(payload, keep) => {
            let full = encode_status_response(&payload);
            let _ = stream.write_all(&full[..keep.min(full.len())]).await;
        }
        Behavior::Silent => {
            // Outlive any reasonable probe timeout; the test runtime
            // tears this task down on shutdown
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    }

    let _ = stream.shutdown().await;
}
