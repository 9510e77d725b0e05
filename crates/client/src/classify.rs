//! Response classification: direct image vs. HTML document.

use crate::fetch::TransportResponse;
use linkcard_core::{Error, PreviewResult};

/// Outcome of inspecting a fetched response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// The URL points straight at an image; no HTML parsing is needed.
    Image(PreviewResult),
    /// Raw HTML text for the extractor.
    Html(String),
}

/// Classify a response fetched for `url`.
///
/// Any header value starting with `image/` short-circuits to an image preview.
/// Header values are compared as bytes, so non-ASCII values elsewhere in the
/// headers never fail the call. Otherwise the body is read as text; a response
/// without a body is [`Error::NoLinks`].
pub async fn classify(response: Box<dyn TransportResponse>, url: &str) -> Result<Classified, Error> {
    if let Some(media_type) = image_media_type(response.as_ref()) {
        tracing::debug!("{} is a direct {} response", url, media_type);
        return Ok(Classified::Image(PreviewResult::image(url, media_type)));
    }

    if !response.has_body() {
        return Err(Error::NoLinks);
    }

    if !response.status().is_success() {
        tracing::debug!("parsing {} body of {} anyway", response.status(), url);
    }

    response.text().await.map(Classified::Html)
}

fn image_media_type(response: &dyn TransportResponse) -> Option<String> {
    response
        .headers()
        .values()
        .find(|value| value.as_bytes().starts_with(b"image/"))
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
