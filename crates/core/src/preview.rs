//! Link preview data model.
//!
//! A [`PreviewResult`] is built once per call and never mutated afterwards.
//! Field names serialize in camelCase (`mediaType`, `secureUrl`) for client apps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Media type reported when the page declares none.
pub const DEFAULT_MEDIA_TYPE: &str = "website";

/// Meta-tag namespace used for image lookup when no custom one is requested.
pub const DEFAULT_IMAGES_PROPERTY_TYPE: &str = "og";

/// Options accepted by a preview call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOptions {
    /// Meta-tag namespace for image extraction (e.g. "twitter").
    ///
    /// Any non-empty value, "og" included, disables the `image_src` and `<img>` fallbacks.
    #[serde(default)]
    pub images_property_type: Option<String>,
}

impl PreviewOptions {
    /// Options with a custom images namespace.
    pub fn with_images_property_type(namespace: impl Into<String>) -> Self {
        Self { images_property_type: Some(namespace.into()) }
    }

    /// The requested images namespace, if a non-empty one was given.
    pub fn custom_images_property_type(&self) -> Option<&str> {
        self.images_property_type.as_deref().filter(|ns| !ns.is_empty())
    }

    /// The namespace that image lookup actually uses.
    pub fn images_property_type(&self) -> &str {
        self.custom_images_property_type()
            .unwrap_or(DEFAULT_IMAGES_PROPERTY_TYPE)
    }
}

/// A single `og:video` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// `og:video` content
    pub url: Option<String>,
    /// Positionally paired `og:video:secure_url` content
    pub secure_url: Option<String>,
    /// Positionally paired `og:video:type` content
    #[serde(rename = "type")]
    pub video_type: String,
    /// First `og:video:width`, shared by every entry
    pub width: Option<String>,
    /// First `og:video:height`, shared by every entry
    pub height: Option<String>,
}

/// Normalized link preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    /// The URL that was fetched, as detected in the input text
    pub url: String,
    /// Page title, empty when none was found
    pub title: String,
    /// Page description
    pub description: Option<String>,
    /// Declared media type, `"website"` when undetermined
    pub media_type: String,
    /// Absolute image URLs in document order
    pub images: Vec<String>,
    /// Video entries, `video/*` types first
    pub videos: Vec<VideoRecord>,
}

impl PreviewResult {
    /// Preview for a URL that responded with an image directly.
    pub fn image(url: impl Into<String>, media_type: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.clone(),
            title: String::new(),
            description: Some(String::new()),
            media_type: media_type.into(),
            images: vec![url],
            videos: Vec::new(),
        }
    }
}
