//! HTTP client setup and middleware configuration.
//!
//! Every hop gets its own client so that the tracer hooks installed into it
//! only ever observe that hop. The client:
//!
//! - never follows redirects (the prober walks the chain itself),
//! - ignores system proxies, so the events describe the real target,
//! - wraps requests in `reqwest-tracing` spans.
//!
//! # Examples
//!
//! ```rust
//! use reach::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client with a Tracer
//!
//! ```rust
//! use reach::http::{create_http_client, HttpClientConfig, Tracer};
//! use reqwest::Url;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (tracer, _events) = Tracer::channel(Url::parse("https://example.com")?);
//! let client = create_http_client(HttpClientConfig {
//!     tracer: Some(tracer),
//!     ..HttpClientConfig::default()
//! })?;
//! # Ok(())
//! # }
//! ```

use super::trace::{ConnectTraceLayer, Tracer, TracingResolver};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// Default `User-Agent` sent with every probe.
pub const DEFAULT_USER_AGENT: &str = concat!("reach/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Tracer receiving the lifecycle events of the request.
    pub tracer: Option<Tracer>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self {
            tracer: None,
            headers: Some(headers),
        }
    }
}

impl HttpClientConfig {
    /// Default configuration reporting to `tracer`.
    pub fn traced(tracer: Tracer) -> Self {
        Self {
            tracer: Some(tracer),
            ..Self::default()
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// # Arguments
///
/// * `config` - Configuration for the HTTP client
///
/// # Returns
///
/// A configured `ClientWithMiddleware` ready for use
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder()
        .redirect(Policy::none())
        .no_proxy();

    // Configure default headers if provided
    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    // Hook the resolver and the connector
    if let Some(tracer) = config.tracer {
        inner_client_builder = inner_client_builder
            .dns_resolver(Arc::new(TracingResolver::new(tracer.clone())))
            .connector_layer(ConnectTraceLayer::new(tracer));
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
