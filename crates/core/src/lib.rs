//! Core types and shared functionality for linkcard.
//!
//! This crate provides:
//! - The link preview data model
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod preview;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use preview::{DEFAULT_IMAGES_PROPERTY_TYPE, DEFAULT_MEDIA_TYPE, PreviewOptions, PreviewResult, VideoRecord};
