//! HTTP transport seam for the preview pipeline.
//!
//! The pipeline only needs three things from a response: its headers, whether
//! it carries a body, and a way to read that body as text. [`Transport`] and
//! [`TransportResponse`] capture exactly that, so tests and hosts can plug in
//! their own client. [`HttpTransport`] is the reqwest-backed default.
//!
//! ### Responsibilities left to the transport
//! - Redirects (default: at most 5)
//! - TLS (rustls) and content decoding (gzip, brotli, deflate)
//! - Timeouts (default: 20s)

pub mod url;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub use self::url::{UrlError, request_url};

use ::url::Url;
use linkcard_core::Error;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "linkcard/0.1")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { user_agent: "linkcard/0.1".to_string(), timeout: Duration::from_millis(20000), max_redirects: 5 }
    }
}

impl From<&linkcard_core::AppConfig> for FetchConfig {
    fn from(config: &linkcard_core::AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.timeout(), max_redirects: config.max_redirects }
    }
}

/// A response whose body has not been read yet.
#[async_trait]
pub trait TransportResponse: Send {
    /// HTTP status code.
    fn status(&self) -> StatusCode;

    /// Response headers.
    fn headers(&self) -> &HeaderMap;

    /// Whether the response carries a body at all.
    fn has_body(&self) -> bool;

    /// Read the whole body as text.
    async fn text(self: Box<Self>) -> Result<String, Error>;
}

/// Issues GET requests on behalf of the pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request for `url` with the given request headers.
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<Box<dyn TransportResponse>, Error>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    config: FetchConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<Box<dyn TransportResponse>, Error> {
        let response = self
            .http
            .get(url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("network error: {}", e)))?;

        tracing::debug!("fetched {} -> {} ({})", url, response.url(), response.status());

        Ok(Box::new(HttpResponse(response)))
    }
}

/// Response returned by [`HttpTransport`].
struct HttpResponse(reqwest::Response);

#[async_trait]
impl TransportResponse for HttpResponse {
    fn status(&self) -> StatusCode {
        self.0.status()
    }

    fn headers(&self) -> &HeaderMap {
        self.0.headers()
    }

    fn has_body(&self) -> bool {
        body_expected(self.0.status(), self.0.content_length())
    }

    async fn text(self: Box<Self>) -> Result<String, Error> {
        self.0
            .text()
            .await
            .map_err(|e| Error::ReadFailed(format!("failed to read response: {}", e)))
    }
}

/// No-content statuses and an explicit zero length mean there is nothing to read.
fn body_expected(status: StatusCode, content_length: Option<u64>) -> bool {
    !matches!(status, StatusCode::NO_CONTENT | StatusCode::NOT_MODIFIED) && content_length != Some(0)
}
