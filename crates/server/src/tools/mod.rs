//! MCP tool implementations.
//!
//! This module contains all tools exposed by the linkcard server.

pub mod link_preview;
pub mod preview_html;

pub use link_preview::{LinkPreviewParams, preview_impl};
pub use preview_html::{PreviewHtmlParams, preview_html_impl};
