//! Single-hop request execution.
//!
//! [`HttpTransport`] sends exactly one HEAD request and never follows
//! redirects. While the request is in flight it drains the attempt's tracer
//! channel, forwarding progress to the [`ProgressDisplay`] and bailing out on
//! the first failure a hook reports.
//!
//! The response-header timeout starts once the connection is ready, so DNS
//! and connect time do not count against it. Every hop gets a fresh budget.

use super::client::{create_http_client, HttpClientConfig};
use super::trace::{is_tls_failure, Tracer, TransportEvent};
use crate::error::{report, Error, Result};
use crate::probe::Attempt;
use crate::progress::ProgressDisplay;

use reqwest::header::LOCATION;
use reqwest::Url;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Something that can turn a URL into one [`Attempt`].
///
/// The prober only talks to this trait, which keeps the redirect walk
/// testable without a network.
pub trait Transport {
    /// Request `url` once, reporting progress to `display`.
    fn execute(
        &self,
        url: &Url,
        display: &ProgressDisplay,
    ) -> impl Future<Output = Result<Attempt>>;
}

/// The real transport: HEAD over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport waiting at most `timeout` for response headers.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Gets the response-header timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, url: &Url, display: &ProgressDisplay) -> Result<Attempt> {
        let (tracer, mut events) = Tracer::channel(url.clone());
        let client = create_http_client(HttpClientConfig::traced(tracer.clone()))
            .map_err(|e| Error::Internal(format!("cannot build HTTP client: {}", report(&e))))?;

        debug!(%url, "sending HEAD request");
        let request = client.head(url.clone()).send();
        tokio::pin!(request);

        let deadline = sleep(self.timeout);
        tokio::pin!(deadline);
        let mut armed = false;

        let sent = loop {
            tokio::select! {
                biased;
                Some(event) = events.recv() => {
                    if event.is_connection_ready() {
                        deadline.as_mut().reset(Instant::now() + self.timeout);
                        armed = true;
                    }
                    observe(&event, display)?;
                }
                () = &mut deadline, if armed => {
                    debug!(%url, timeout = ?self.timeout, "no response headers in time");
                    return Err(Error::Timeout);
                }
                sent = &mut request => break sent,
            }
        };

        // Hooks that fired during the final poll are still queued.
        drain(&mut events, display)?;
        let response = sent.map_err(classify)?;

        let status = response.status();
        tracer.emit(TransportEvent::FirstByte);
        // hyper consumes interim 1xx heads itself, so only a final 1xx
        // (e.g. 101) shows up here.
        if status.is_informational() {
            tracer.emit(TransportEvent::Provisional);
        }
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        // A HEAD response has no body; reading it hands the connection back.
        match response.bytes().await {
            Ok(_) => tracer.emit(TransportEvent::Finalize(Ok(()))),
            Err(e) => tracer.emit(TransportEvent::Finalize(Err(report(&e)))),
        }
        drain(&mut events, display)?;

        debug!(%url, %status, ?location, "hop complete");
        Ok(Attempt::new(url.clone(), status, location))
    }
}

fn observe(event: &TransportEvent, display: &ProgressDisplay) -> Result<()> {
    let text = event.progress()?;
    display.progress(text);
    Ok(())
}

fn drain(events: &mut UnboundedReceiver<TransportEvent>, display: &ProgressDisplay) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        observe(&event, display)?;
    }
    Ok(())
}

/// Map a failed send onto the error kinds the user sees.
fn classify(err: reqwest_middleware::Error) -> Error {
    match err {
        reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => Error::Timeout,
        reqwest_middleware::Error::Reqwest(e) if is_tls_failure(&e) => {
            Error::TlsHandshake(report(&e))
        }
        reqwest_middleware::Error::Reqwest(e) if e.is_connect() => Error::Connect(report(&e)),
        reqwest_middleware::Error::Reqwest(e) => Error::Transport(report(&e)),
        reqwest_middleware::Error::Middleware(e) => Error::Transport(format!("{:#}", e)),
    }
}
