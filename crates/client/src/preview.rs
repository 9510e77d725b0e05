//! Preview orchestration: detect → fetch → classify → extract.
//!
//! ### Failure reporting
//! - Empty text is [`Error::MissingInput`].
//! - No detected URL, an unusable detected URL and a failed fetch are all
//!   reported as [`Error::NoUrlFound`]; the transport cause is only logged.
//! - Classification and extraction errors propagate unchanged.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::classify::{Classified, classify};
use crate::detect::detect_url;
use crate::extract::{Extractor, MetaExtractor};
use crate::fetch::{FetchConfig, HttpTransport, Transport, request_url};
use linkcard_core::{Error, PreviewOptions, PreviewResult};

/// Runs the full preview pipeline over a transport and an extractor.
#[derive(Clone)]
pub struct LinkPreviewer {
    transport: Arc<dyn Transport>,
    extractor: Arc<dyn Extractor>,
}

impl LinkPreviewer {
    /// Create a previewer using the meta-tag extractor.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, extractor: Arc::new(MetaExtractor::new()) }
    }

    /// Replace the extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Build a preview for the first URL found in `text`.
    pub async fn get_preview(&self, text: &str, options: &PreviewOptions) -> Result<PreviewResult, Error> {
        if text.is_empty() {
            return Err(Error::MissingInput);
        }

        let detected = detect_url(text).ok_or(Error::NoUrlFound)?;

        let target = request_url(detected).map_err(|e| {
            tracing::warn!(url = %detected, error = %e, "detected link is not fetchable");
            Error::NoUrlFound
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));

        let response = self.transport.get(&target, headers).await.map_err(|e| {
            tracing::warn!(url = %detected, error = %e, "failed to fetch link preview");
            Error::NoUrlFound
        })?;

        match classify(response, detected).await? {
            Classified::Image(preview) => Ok(preview),
            Classified::Html(body) => {
                let extracted = self.extractor.extract(&body, &target, options)?;
                Ok(PreviewResult { url: detected.to_string(), ..extracted })
            }
        }
    }
}

/// Build a preview over a default [`HttpTransport`].
pub async fn get_preview(text: &str, options: &PreviewOptions) -> Result<PreviewResult, Error> {
    let transport = HttpTransport::new(FetchConfig::default())?;
    LinkPreviewer::new(Arc::new(transport))
        .get_preview(text, options)
        .await
}
