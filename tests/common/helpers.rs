#![allow(dead_code)]

use reach::http::Transport;
use reach::progress::ProgressDisplay;
use reach::{Attempt, Error, Prober, ProberBuilder};
use reqwest::{StatusCode, Url};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// Common test constants
pub const TEST_ORIGIN: &str = "http://a.test";
pub const TEST_REDIRECT_TARGET: &str = "http://b.test";
pub const TEST_TIMEOUT: Duration = Duration::from_secs(1);

// === Mock Transport ===

/// What the mock answers for one URL.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A response with a status code and an optional `Location`.
    Respond(u16, Option<&'static str>),
    /// A failed attempt.
    Fail(Error),
}

/// A scripted [`Transport`] that records every URL it is asked for.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: HashMap<String, MockReply>,
    calls: Arc<Mutex<Vec<Url>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `url` with `reply`.
    pub fn on(mut self, url: &str, reply: MockReply) -> Self {
        let key = Url::parse(url).expect("Invalid mock URL").to_string();
        self.replies.insert(key, reply);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().expect("Poisoned call log").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("Poisoned call log").len()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, url: &Url, display: &ProgressDisplay) -> reach::Result<Attempt> {
        self.calls.lock().expect("Poisoned call log").push(url.clone());
        display.progress("Receiving Response");
        match self.replies.get(url.as_str()) {
            Some(MockReply::Respond(code, location)) => Ok(Attempt::new(
                url.clone(),
                StatusCode::from_u16(*code).expect("Invalid status code"),
                location.map(String::from),
            )),
            Some(MockReply::Fail(err)) => Err(err.clone()),
            None => Err(Error::Connect(format!("no mock reply for {}", url))),
        }
    }
}

/// Creates a hidden prober over `transport`.
pub fn create_mock_prober(transport: MockTransport, max_redirects: u32) -> Prober<MockTransport> {
    ProberBuilder::hidden()
        .max_redirects(max_redirects)
        .color(false)
        .build_with(transport)
}

// === Attempt Helpers ===

/// Creates an attempt for `url` with the given status and location.
pub fn create_test_attempt(url: &str, code: u16, location: Option<&str>) -> Attempt {
    Attempt::new(
        Url::parse(url).expect("Invalid test URL"),
        StatusCode::from_u16(code).expect("Invalid status code"),
        location.map(String::from),
    )
}

// === Local HTTP Stub ===

/// Reads one request head and returns its path.
async fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(String::from)
}

/// Builds a raw response with an empty body.
pub fn raw_response(code: u16, reason: &str, location: Option<&str>) -> String {
    let mut response = format!("HTTP/1.1 {} {}\r\n", code, reason);
    if let Some(location) = location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    response.push_str("Content-Length: 0\r\nConnection: close\r\n\r\n");
    response
}

/// Spawns a local server answering each path with a canned response.
///
/// Unknown paths get a 404.
pub async fn spawn_stub_server(routes: Vec<(&'static str, String)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");
    let routes: HashMap<&'static str, String> = routes.into_iter().collect();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let Some(path) = read_request_path(&mut stream).await else {
                    return;
                };
                let response = routes
                    .get(path.as_str())
                    .cloned()
                    .unwrap_or_else(|| raw_response(404, "Not Found", None));
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// Spawns a local server that accepts and reads requests but never answers.
pub async fn spawn_silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent server");
    let addr = listener.local_addr().expect("Silent server has no address");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = read_request_path(&mut stream).await;
                tokio::time::sleep(Duration::from_secs(60)).await;
                drop(stream);
            });
        }
    });

    addr
}

/// Spawns a plain-HTTP server that answers before reading anything, so a
/// TLS client gets an HTTP response where it expects a ServerHello.
pub async fn spawn_plaintext_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind plaintext server");
    let addr = listener.local_addr().expect("Plaintext server has no address");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let response = raw_response(400, "Bad Request", None);
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// Returns a local address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    addr
}

/// `http://<addr><path>`
pub fn local_url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
