//! Structured errors for the linkcard server.
//!
//! Pipeline failures convert straight from `linkcard_core::Error`; these cover
//! what only the tool layer can get wrong.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Structured errors for the linkcard server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Invalid input parameters (e.g., empty HTML).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Tool output could not be serialized.
    #[error("SERIALIZE_FAILED: {0}")]
    Serialize(String),
}

impl From<WebError> for McpError {
    fn from(err: WebError) -> Self {
        let code = match &err {
            WebError::InvalidInput(_) => -32602,
            WebError::Serialize(_) => -32603,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        WebError::Serialize(err.to_string())
    }
}
