//! In-memory transport for exercising the pipeline without a network.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Mutex;
use url::Url;

use crate::fetch::{Transport, TransportResponse};
use linkcard_core::Error;

/// Canned response served by [`StaticTransport`].
#[derive(Debug, Clone)]
pub struct StaticResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl StaticResponse {
    /// 200 response with a `text/html` body.
    pub fn html(body: &str) -> Self {
        Self::with_content_type("text/html; charset=utf-8", Some(body))
    }

    pub fn with_content_type(content_type: &str, body: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        Self { status: StatusCode::OK, headers, body: body.map(str::to_string) }
    }

    pub fn header(mut self, name: &'static str, value: HeaderValue) -> Self {
        self.headers.insert(HeaderName::from_static(name), value);
        self
    }
}

#[async_trait]
impl TransportResponse for StaticResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn has_body(&self) -> bool {
        self.body.is_some()
    }

    async fn text(self: Box<Self>) -> Result<String, Error> {
        self.body.ok_or_else(|| Error::ReadFailed("no body".into()))
    }
}

/// Transport that serves one canned response and records what was requested.
pub struct StaticTransport {
    response: Option<StaticResponse>,
    pub requests: Mutex<Vec<(Url, HeaderMap)>>,
}

impl StaticTransport {
    pub fn new(response: StaticResponse) -> Self {
        Self { response: Some(response), requests: Mutex::new(Vec::new()) }
    }

    /// Transport whose every request fails.
    pub fn failing() -> Self {
        Self { response: None, requests: Mutex::new(Vec::new()) }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<Box<dyn TransportResponse>, Error> {
        self.requests.lock().unwrap().push((url.clone(), headers));
        match &self.response {
            Some(response) => Ok(Box::new(response.clone())),
            None => Err(Error::Transport("connection refused".into())),
        }
    }
}
