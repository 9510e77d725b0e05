//! Client code for linkcard.
//!
//! This crate provides URL detection, the HTTP transport seam, response
//! classification, meta-tag extraction and the preview pipeline that ties
//! them together.

pub mod classify;
pub mod detect;
pub mod extract;
pub mod fetch;
pub mod preview;

#[cfg(test)]
mod testing;

pub use classify::{Classified, classify};
pub use detect::detect_url;
pub use extract::{Extractor, MetaExtractor, extract_preview};
pub use fetch::{FetchConfig, HttpTransport, Transport, TransportResponse};
pub use preview::{LinkPreviewer, get_preview};
