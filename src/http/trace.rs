//! Connection lifecycle tracing.
//!
//! A [`Tracer`] is created for every attempt and installed into that
//! attempt's HTTP client through two hooks:
//!
//! - [`TracingResolver`] implements `reqwest::dns::Resolve` on top of the
//!   system resolver and reports the DNS lookup.
//! - [`ConnectTraceLayer`] wraps reqwest's connector service and reports the
//!   TCP connect and, for `https`, the TLS handshake.
//!
//! Both hooks push [`TransportEvent`]s into an unbounded channel whose only
//! consumer is the executor driving the request.

use crate::error::{report, Error};

use futures::future::BoxFuture;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::Url;
use std::error::Error as StdError;
use std::io;
use std::net::SocketAddr;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tower::{Layer, Service};
use tracing::trace;

type BoxError = Box<dyn StdError + Send + Sync>;

/// A network-level event observed while a single request is in flight.
///
/// Failures carry a one-line description of what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    DnsStart,
    DnsDone(Result<(), String>),
    ConnectStart,
    ConnectDone(Result<(), String>),
    TlsDone(Result<(), String>),
    FirstByte,
    Provisional,
    Finalize(Result<(), String>),
}

impl TransportEvent {
    /// The progress text for this event, or the error it stands for.
    pub fn progress(&self) -> Result<&'static str, Error> {
        match self {
            TransportEvent::DnsStart => Ok("Starting DNS Lookup"),
            TransportEvent::DnsDone(Ok(())) => Ok("DNS Lookup Complete"),
            TransportEvent::DnsDone(Err(e)) => Err(Error::Dns(e.clone())),
            TransportEvent::ConnectStart => Ok("Connection Started"),
            TransportEvent::ConnectDone(Ok(())) => Ok("Connected - waiting for response..."),
            TransportEvent::ConnectDone(Err(e)) => Err(Error::Connect(e.clone())),
            TransportEvent::TlsDone(Ok(())) => Ok("TLS Handshake Complete."),
            TransportEvent::TlsDone(Err(e)) => Err(Error::TlsHandshake(e.clone())),
            TransportEvent::FirstByte => Ok("Receiving Response"),
            TransportEvent::Provisional => Ok("Received 100 Response - Waiting..."),
            TransportEvent::Finalize(Ok(())) => Ok("Connection finished"),
            TransportEvent::Finalize(Err(e)) => Err(Error::ConnectionFinalize(e.clone())),
        }
    }

    /// Whether the request can now be written, i.e. the wait for the
    /// response headers starts.
    pub fn is_connection_ready(&self) -> bool {
        matches!(
            self,
            TransportEvent::ConnectDone(Ok(())) | TransportEvent::TlsDone(Ok(()))
        )
    }
}

/// The sending half of one attempt's event channel.
#[derive(Debug, Clone)]
pub struct Tracer {
    target: Url,
    events: UnboundedSender<TransportEvent>,
}

impl Tracer {
    /// Create a tracer for `target` and the receiver for its events.
    pub fn channel(target: Url) -> (Self, UnboundedReceiver<TransportEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { target, events }, rx)
    }

    /// Report an event. Events sent after the attempt is over are dropped.
    pub fn emit(&self, event: TransportEvent) {
        trace!(target_url = %self.target, ?event, "transport event");
        let _ = self.events.send(event);
    }

    /// The URL of the attempt being traced.
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Whether connecting requires a DNS lookup (the host is not an IP literal).
    pub fn uses_dns(&self) -> bool {
        matches!(self.target.host(), Some(url::Host::Domain(_)))
    }

    /// Whether the connection ends with a TLS handshake.
    pub fn uses_tls(&self) -> bool {
        self.target.scheme() == "https"
    }
}

/// System resolver that reports lookups to a [`Tracer`].
#[derive(Debug, Clone)]
pub struct TracingResolver {
    tracer: Tracer,
}

impl TracingResolver {
    pub fn new(tracer: Tracer) -> Self {
        Self { tracer }
    }
}

impl Resolve for TracingResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let tracer = self.tracer.clone();
        Box::pin(async move {
            tracer.emit(TransportEvent::DnsStart);

            let resolved = tokio::net::lookup_host((name.as_str(), 0)).await;
            match resolved {
                Ok(addrs) => {
                    let addrs: Vec<SocketAddr> = addrs.collect();
                    tracer.emit(TransportEvent::DnsDone(Ok(())));
                    tracer.emit(TransportEvent::ConnectStart);
                    let addrs: Addrs = Box::new(addrs.into_iter());
                    Ok(addrs)
                }
                Err(e) => {
                    tracer.emit(TransportEvent::DnsDone(Err(e.to_string())));
                    Err(Box::new(e) as BoxError)
                }
            }
        })
    }
}

/// Connector layer that reports connection and handshake results.
#[derive(Debug, Clone)]
pub struct ConnectTraceLayer {
    tracer: Tracer,
}

impl ConnectTraceLayer {
    pub fn new(tracer: Tracer) -> Self {
        Self { tracer }
    }
}

impl<S> Layer<S> for ConnectTraceLayer {
    type Service = ConnectTrace<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ConnectTrace {
            inner,
            tracer: self.tracer.clone(),
        }
    }
}

/// Service produced by [`ConnectTraceLayer`].
#[derive(Debug, Clone)]
pub struct ConnectTrace<S> {
    inner: S,
    tracer: Tracer,
}

impl<S, R> Service<R> for ConnectTrace<S>
where
    S: Service<R> + Clone + Send + 'static,
    S::Response: Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<S::Response, BoxError>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: R) -> Self::Future {
        let tracer = self.tracer.clone();
        // Lookups announce the connect themselves once they succeed.
        if !tracer.uses_dns() {
            tracer.emit(TransportEvent::ConnectStart);
        }

        let connecting = self.inner.call(req);
        Box::pin(async move {
            match connecting.await.map_err(Into::into) {
                Ok(conn) => {
                    tracer.emit(TransportEvent::ConnectDone(Ok(())));
                    if tracer.uses_tls() {
                        tracer.emit(TransportEvent::TlsDone(Ok(())));
                    }
                    Ok(conn)
                }
                Err(err) => {
                    let detail = report(&*err);
                    if is_tls_failure(&*err) {
                        tracer.emit(TransportEvent::ConnectDone(Ok(())));
                        tracer.emit(TransportEvent::TlsDone(Err(detail)));
                    } else {
                        tracer.emit(TransportEvent::ConnectDone(Err(detail)));
                    }
                    Err(err)
                }
            }
        })
    }
}

/// Whether a connector error comes from the TLS layer.
///
/// Handshake failures arrive as an `io::Error` wrapping the `rustls::Error`,
/// and `hyper-rustls` wraps that `io::Error` in another one. Custom
/// `io::Error` payloads are not reachable through `source`, so every
/// `io::Error` on the way down is opened with `get_ref`.
pub fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    if err.is::<rustls::Error>() {
        return true;
    }
    if let Some(inner) = err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        if is_tls_failure(inner) {
            return true;
        }
    }
    err.source().is_some_and(is_tls_failure)
}
