//! Unified error types for linkcard.
//!
//! Every failure of a preview call surfaces as exactly one of these variants.
//! The uppercase prefix of each message is a stable code that hosts can match on.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error type for the preview pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input text was empty.
    #[error("MISSING_INPUT: did not receive either a url or text")]
    MissingInput,

    /// No URL was found in the text, or fetching the detected URL failed.
    #[error("NO_URL_FOUND: did not find a link in the text")]
    NoUrlFound,

    /// The response carried no body to parse.
    #[error("NO_LINKS: response has no body")]
    NoLinks,

    /// The response headers could not be read.
    #[error("NO_DATA: no data for this link")]
    NoData,

    /// Reading the response body failed.
    #[error("READ_FAILED: {0}")]
    ReadFailed(String),

    /// Invalid caller-supplied parameters (e.g., an unusable images namespace).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Metadata extraction failed.
    #[error("EXTRACT_FAILED: {0}")]
    ExtractFailed(String),

    /// The HTTP transport failed before a response was available.
    #[error("TRANSPORT_ERROR: {0}")]
    Transport(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::MissingInput | Error::InvalidInput(_) => -32602,
            Error::ExtractFailed(_) => -32000,
            Error::NoUrlFound => -32001,
            Error::NoLinks => -32002,
            Error::NoData => -32003,
            Error::ReadFailed(_) => -32004,
            Error::Transport(_) => -32005,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}
