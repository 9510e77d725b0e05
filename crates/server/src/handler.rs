//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{LinkPreviewParams, PreviewHtmlParams, preview_html_impl, preview_impl};

use linkcard_client::LinkPreviewer;
use linkcard_core::AppConfig;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for linkcard.
#[derive(Clone)]
pub struct LinkCardServer {
    tool_router: ToolRouter<Self>,
    previewer: LinkPreviewer,
    config: Arc<AppConfig>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl LinkCardServer {
    /// Create a new server handler.
    pub fn new(previewer: LinkPreviewer, config: AppConfig) -> Self {
        Self { tool_router: Self::tool_router(), previewer, config: Arc::new(config) }
    }

    /// Build a link preview from free-form text.
    ///
    /// The first URL in the text is fetched; direct image responses short-circuit.
    #[tool(
        description = "Find the first URL in text and return its link preview: title, description, media type, images and videos."
    )]
    async fn link_preview(&self, params: Parameters<LinkPreviewParams>) -> Result<CallToolResult, McpError> {
        preview_impl(&self.previewer, &self.config, params.0).await
    }

    /// Build a link preview from caller-supplied HTML.
    #[tool(description = "Extract a link preview from raw HTML and the URL it came from. No network requests are made.")]
    async fn preview_html(&self, params: Parameters<PreviewHtmlParams>) -> Result<CallToolResult, McpError> {
        preview_html_impl(&self.config, params.0)
    }
}

impl ServerHandler for LinkCardServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "linkcard".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
