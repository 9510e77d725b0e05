//! preview_html tool implementation.
//!
//! Runs the meta-tag extractor over HTML supplied by the client.
//! No network I/O is performed.

use linkcard_client::extract_preview;
use linkcard_core::AppConfig;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::WebError;

/// Input parameters for preview_html tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PreviewHtmlParams {
    /// The raw HTML content to extract from.
    pub html: String,

    /// The absolute URL the HTML was served from.
    /// Relative image URLs are resolved against it.
    pub url: String,

    /// Meta-tag namespace for images, e.g. "twitter".
    #[serde(default)]
    pub images_property_type: Option<String>,
}

/// Implementation of the preview_html tool.
pub fn preview_html_impl(config: &AppConfig, params: PreviewHtmlParams) -> Result<CallToolResult, McpError> {
    if params.html.is_empty() {
        return Err(WebError::InvalidInput("html cannot be empty".into()).into());
    }

    let base = Url::parse(&params.url).map_err(|e| WebError::InvalidInput(format!("invalid url: {e}")))?;
    let options = config.preview_options(params.images_property_type);

    let mut preview = extract_preview(&params.html, &base, &options)?;
    preview.url = params.url;

    let json = serde_json::to_string_pretty(&preview).map_err(WebError::from)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
