//! link_preview tool implementation.
//!
//! Finds the first URL in free-form text, fetches it and returns its preview.

use linkcard_client::LinkPreviewer;
use linkcard_core::AppConfig;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WebError;

/// Input parameters for link_preview tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkPreviewParams {
    /// Free-form text containing a link (e.g., a pasted chat message).
    pub text: String,

    /// Meta-tag namespace for images, e.g. "twitter".
    /// Defaults to the server configuration, then "og".
    #[serde(default)]
    pub images_property_type: Option<String>,
}

/// Implementation of the link_preview tool.
pub async fn preview_impl(
    previewer: &LinkPreviewer, config: &AppConfig, params: LinkPreviewParams,
) -> Result<CallToolResult, McpError> {
    let options = config.preview_options(params.images_property_type);
    let preview = previewer.get_preview(&params.text, &options).await?;

    tracing::debug!(url = %preview.url, images = preview.images.len(), "built link preview");

    let json = serde_json::to_string_pretty(&preview).map_err(WebError::from)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
