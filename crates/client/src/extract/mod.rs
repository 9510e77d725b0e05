//! Open Graph / HTML meta-tag extraction.
//!
//! Maps a parsed HTML document to a [`PreviewResult`] using ordered rules:
//!
//! ### Title
//! - `og:title`, then the `<title>` text, then `""`.
//!
//! ### Description
//! - `meta[name=description]`, `meta[name=Description]`, `og:description`.
//!   The first tag whose `content` attribute is present wins, even when empty.
//!
//! ### Media type
//! - `meta[name=medium]` (`image` reads as `photo`), else `og:type`, else `website`.
//!
//! ### Images
//! - Every `{namespace}:image` tag, namespace `og` unless the caller picks one.
//! - With the default namespace and no images: `link[rel=image_src]`, else every `<img>`.
//!
//! ### Videos
//! - See [`videos`].

pub mod resolve;

use linkcard_core::{DEFAULT_MEDIA_TYPE, Error, PreviewOptions, PreviewResult, VideoRecord};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

use resolve::resolve_against;

/// Stable extractor trait for metadata extraction.
///
/// This allows swapping the extraction rules without changing the orchestrator.
pub trait Extractor: Send + Sync {
    /// Extract a preview from raw HTML fetched from `url`.
    fn extract(&self, html: &str, url: &Url, options: &PreviewOptions) -> Result<PreviewResult, Error>;
}

/// Meta-tag extractor backed by scraper.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaExtractor;

impl MetaExtractor {
    /// Create a new meta-tag extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a preview from an already parsed document.
    ///
    /// Pure: the same document, URL and options always give the same result.
    pub fn extract_document(&self, doc: &Html, url: &Url, options: &PreviewOptions) -> Result<PreviewResult, Error> {
        Ok(PreviewResult {
            url: url.to_string(),
            title: title(doc),
            description: description(doc),
            media_type: media_type(doc)
                .filter(|media_type| !media_type.is_empty())
                .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
            images: images(doc, url, options)?,
            videos: videos(doc)?,
        })
    }
}

impl Extractor for MetaExtractor {
    fn extract(&self, html: &str, url: &Url, options: &PreviewOptions) -> Result<PreviewResult, Error> {
        let doc = Html::parse_document(html);
        self.extract_document(&doc, url, options)
    }
}

/// Extract a preview from HTML using the default extractor.
pub fn extract_preview(html: &str, url: &Url, options: &PreviewOptions) -> Result<PreviewResult, Error> {
    MetaExtractor::new().extract(html, url, options)
}

fn selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::InvalidInput(format!("bad selector {css}: {e}")))
}

/// Every element matching a fixed selector, in document order.
fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let sel = Selector::parse(css).expect("invalid selector");
    doc.select(&sel).collect()
}

/// `attr` of the first element matching `css`; `None` when there is no such
/// element or it lacks the attribute.
fn first_attr(doc: &Html, css: &str, attr: &str) -> Option<String> {
    select_all(doc, css)
        .first()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

fn content(el: &ElementRef<'_>) -> Option<String> {
    el.value().attr("content").map(str::to_string)
}

/// Page title: `og:title`, then `<title>` text.
pub fn title(doc: &Html) -> String {
    first_attr(doc, r#"meta[property="og:title"]"#, "content")
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| {
            select_all(doc, "title")
                .iter()
                .flat_map(|el| el.text())
                .collect()
        })
}

/// Page description; the lookups are case-sensitive on `name`.
pub fn description(doc: &Html) -> Option<String> {
    first_attr(doc, r#"meta[name="description"]"#, "content")
        .or_else(|| first_attr(doc, r#"meta[name="Description"]"#, "content"))
        .or_else(|| first_attr(doc, r#"meta[property="og:description"]"#, "content"))
}

/// Declared media type, without the `website` default; may be empty.
pub fn media_type(doc: &Html) -> Option<String> {
    match select_all(doc, r#"meta[name="medium"]"#).first() {
        Some(medium) => content(medium).map(|value| if value == "image" { "photo".to_string() } else { value }),
        None => first_attr(doc, r#"meta[property="og:type"]"#, "content"),
    }
}

/// Absolute image URLs in document order.
pub fn images(doc: &Html, base: &Url, options: &PreviewOptions) -> Result<Vec<String>, Error> {
    let css = format!(r#"meta[property="{}:image"]"#, options.images_property_type());
    let sel = selector(&css)?;

    let images: Vec<String> = doc
        .select(&sel)
        .filter_map(|el| el.value().attr("content"))
        .filter(|src| !src.is_empty())
        .filter_map(|src| resolve_against(base, src))
        .collect();

    if !images.is_empty() || options.custom_images_property_type().is_some() {
        return Ok(images);
    }

    if let Some(href) = first_attr(doc, r#"link[rel="image_src"]"#, "href").filter(|href| !href.is_empty()) {
        return Ok(resolve_against(base, &href).into_iter().collect());
    }

    let mut seen = HashSet::new();
    Ok(select_all(doc, "img")
        .iter()
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| !src.is_empty() && seen.insert(*src))
        .filter_map(|src| resolve_against(base, src))
        .collect())
}

/// Video entries from `og:video` tags.
///
/// Type and secure URL are paired with the i-th `og:video` by position only,
/// so a missing middle `og:video:type` shifts every later pairing. Width and
/// height come from the first tags and are shared by all entries. Entries with
/// a `video/*` type are inserted at the front, which reverses their relative
/// order; the rest are appended.
///
/// Fails when an entry has no type to pair with.
pub fn videos(doc: &Html) -> Result<Vec<VideoRecord>, Error> {
    let nodes = select_all(doc, r#"meta[property="og:video"]"#);
    if nodes.is_empty() {
        return Ok(Vec::new());
    }

    let types = select_all(doc, r#"meta[property="og:video:type"]"#);
    let secure_urls = select_all(doc, r#"meta[property="og:video:secure_url"]"#);
    let width = first_attr(doc, r#"meta[property="og:video:width"]"#, "content");
    let height = first_attr(doc, r#"meta[property="og:video:height"]"#, "content");

    let mut videos = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let video_type = types
            .get(index)
            .and_then(content)
            .ok_or_else(|| Error::ExtractFailed(format!("og:video entry {index} has no og:video:type")))?;

        let record = VideoRecord {
            url: content(node),
            secure_url: secure_urls.get(index).and_then(content),
            video_type,
            width: width.clone(),
            height: height.clone(),
        };

        if record.video_type.starts_with("video/") {
            videos.insert(0, record);
        } else {
            videos.push(record);
        }
    }

    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://x.com/page";

    fn origin() -> Url {
        Url::parse(ORIGIN).unwrap()
    }

    fn doc(head: &str, body: &str) -> Html {
        Html::parse_document(&format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>"))
    }

    fn extract(head: &str, body: &str, options: &PreviewOptions) -> PreviewResult {
        MetaExtractor::new()
            .extract_document(&doc(head, body), &origin(), options)
            .unwrap()
    }

    #[test]
    fn test_title_from_og() {
        let d = doc(r#"<meta property="og:title" content="Foo">"#, "");
        assert_eq!(title(&d), "Foo");
    }

    #[test]
    fn test_title_og_wins_over_title_tag() {
        let d = doc(r#"<title>Tag</title><meta property="og:title" content="Og">"#, "");
        assert_eq!(title(&d), "Og");
    }

    #[test]
    fn test_title_falls_back_to_title_tag() {
        let d = doc(r#"<meta property="og:title" content=""><title>Plain Title</title>"#, "");
        assert_eq!(title(&d), "Plain Title");
    }

    #[test]
    fn test_title_missing() {
        let d = doc("", "<p>nothing</p>");
        assert_eq!(title(&d), "");
    }

    #[test]
    fn test_description_order() {
        let d = doc(
            r#"<meta property="og:description" content="og"><meta name="Description" content="upper"><meta name="description" content="lower">"#,
            "",
        );
        assert_eq!(description(&d).as_deref(), Some("lower"));

        let d = doc(r#"<meta property="og:description" content="og"><meta name="Description" content="upper">"#, "");
        assert_eq!(description(&d).as_deref(), Some("upper"));

        let d = doc(r#"<meta property="og:description" content="og">"#, "");
        assert_eq!(description(&d).as_deref(), Some("og"));

        let d = doc("", "");
        assert_eq!(description(&d), None);
    }

    #[test]
    fn test_description_empty_content_wins() {
        let d = doc(r#"<meta name="description" content=""><meta property="og:description" content="og">"#, "");
        assert_eq!(description(&d).as_deref(), Some(""));
    }

    #[test]
    fn test_description_without_content_attribute_falls_through() {
        let d = doc(r#"<meta name="description"><meta property="og:description" content="og">"#, "");
        assert_eq!(description(&d).as_deref(), Some("og"));
    }

    #[test]
    fn test_media_type_medium() {
        let d = doc(r#"<meta name="medium" content="image"><meta property="og:type" content="article">"#, "");
        assert_eq!(media_type(&d).as_deref(), Some("photo"));

        let d = doc(r#"<meta name="medium" content="video">"#, "");
        assert_eq!(media_type(&d).as_deref(), Some("video"));
    }

    #[test]
    fn test_media_type_og_type() {
        let d = doc(r#"<meta property="og:type" content="article">"#, "");
        assert_eq!(media_type(&d).as_deref(), Some("article"));
    }

    #[test]
    fn test_media_type_medium_without_content_skips_og_type() {
        let d = doc(r#"<meta name="medium"><meta property="og:type" content="article">"#, "");
        assert_eq!(media_type(&d), None);
    }

    #[test]
    fn test_media_type_default() {
        let preview = extract("", "", &PreviewOptions::default());
        assert_eq!(preview.media_type, "website");
    }

    #[test]
    fn test_media_type_empty_og_type_defaults() {
        let preview = extract(r#"<meta property="og:type" content="">"#, "", &PreviewOptions::default());
        assert_eq!(preview.media_type, "website");
    }

    #[test]
    fn test_media_type_empty_medium_defaults() {
        let preview = extract(
            r#"<meta name="medium" content=""><meta property="og:type" content="article">"#,
            "",
            &PreviewOptions::default(),
        );
        assert_eq!(preview.media_type, "website");
    }

    #[test]
    fn test_images_resolved_against_origin() {
        let d = doc(r#"<meta property="og:image" content="/a.png">"#, "");
        let found = images(&d, &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(found, vec!["https://x.com/a.png"]);
    }

    #[test]
    fn test_images_document_order_skips_empty() {
        let d = doc(
            r#"<meta property="og:image" content="https://cdn.x.com/1.jpg"><meta property="og:image" content=""><meta property="og:image"><meta property="og:image" content="2.jpg">"#,
            "",
        );
        let found = images(&d, &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(found, vec!["https://cdn.x.com/1.jpg", "https://x.com/2.jpg"]);
    }

    #[test]
    fn test_images_og_tags_keep_duplicates() {
        let d = doc(r#"<meta property="og:image" content="/a.png"><meta property="og:image" content="/a.png">"#, "");
        let found = images(&d, &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_images_image_src_before_img() {
        let d = doc(
            r#"<link rel="image_src" href="/b.png">"#,
            r#"<img src="/1.png"><img src="/2.png"><img src="/3.png">"#,
        );
        let found = images(&d, &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(found, vec!["https://x.com/b.png"]);
    }

    #[test]
    fn test_images_img_fallback_dedupes_raw_src() {
        let d = doc("", r#"<img src="/1.png"><img src=""><img><img src="/1.png"><img src="https://x.com/1.png">"#);
        let found = images(&d, &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(found, vec!["https://x.com/1.png", "https://x.com/1.png"]);
    }

    #[test]
    fn test_images_custom_namespace() {
        let d = doc(
            r#"<meta property="twitter:image" content="/t.png"><meta property="og:image" content="/o.png">"#,
            "",
        );
        let found = images(&d, &origin(), &PreviewOptions::with_images_property_type("twitter")).unwrap();
        assert_eq!(found, vec!["https://x.com/t.png"]);
    }

    #[test]
    fn test_images_custom_namespace_skips_fallbacks() {
        let d = doc(
            r#"<meta property="og:image" content="/o.png"><link rel="image_src" href="/b.png">"#,
            r#"<img src="/1.png">"#,
        );
        let found = images(&d, &origin(), &PreviewOptions::with_images_property_type("twitter")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_images_explicit_og_skips_fallbacks() {
        let d = doc("", r#"<img src="/1.png">"#);
        let found = images(&d, &origin(), &PreviewOptions::with_images_property_type("og")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_images_bad_namespace() {
        let d = doc("", "");
        let result = images(&d, &origin(), &PreviewOptions::with_images_property_type(r#"a"]["#));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_videos_none() {
        let d = doc(r#"<meta property="og:video:type" content="video/mp4">"#, "");
        assert!(videos(&d).unwrap().is_empty());
    }

    #[test]
    fn test_videos_direct_type_first() {
        let d = doc(
            r#"
            <meta property="og:video" content="v1">
            <meta property="og:video:type" content="text/html">
            <meta property="og:video" content="v2">
            <meta property="og:video:type" content="video/mp4">
            "#,
            "",
        );
        let found = videos(&d).unwrap();
        let urls: Vec<_> = found.iter().map(|v| v.url.as_deref().unwrap()).collect();
        assert_eq!(urls, vec!["v2", "v1"]);
        assert_eq!(found[0].video_type, "video/mp4");
    }

    #[test]
    fn test_videos_front_insertion_reverses_direct_group() {
        let d = doc(
            r#"
            <meta property="og:video" content="a">
            <meta property="og:video" content="b">
            <meta property="og:video" content="c">
            <meta property="og:video" content="d">
            <meta property="og:video:type" content="video/mp4">
            <meta property="og:video:type" content="application/x-shockwave-flash">
            <meta property="og:video:type" content="video/webm">
            <meta property="og:video:type" content="text/html">
            "#,
            "",
        );
        let urls: Vec<_> = videos(&d)
            .unwrap()
            .into_iter()
            .map(|v| v.url.unwrap())
            .collect();
        assert_eq!(urls, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_videos_positional_pairing_and_shared_size() {
        let d = doc(
            r#"
            <meta property="og:video" content="v1">
            <meta property="og:video:secure_url" content="https://v1">
            <meta property="og:video:type" content="text/html">
            <meta property="og:video:width" content="640">
            <meta property="og:video:height" content="360">
            <meta property="og:video" content="v2">
            <meta property="og:video:type" content="text/html">
            <meta property="og:video:width" content="1280">
            "#,
            "",
        );
        let found = videos(&d).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].secure_url.as_deref(), Some("https://v1"));
        assert_eq!(found[1].secure_url, None);
        for video in &found {
            assert_eq!(video.width.as_deref(), Some("640"));
            assert_eq!(video.height.as_deref(), Some("360"));
        }
    }

    #[test]
    fn test_videos_missing_middle_type_shifts_pairing() {
        let d = doc(
            r#"
            <meta property="og:video" content="v1">
            <meta property="og:video" content="v2">
            <meta property="og:video:type" content="text/html">
            <meta property="og:video" content="v3">
            <meta property="og:video:type" content="video/mp4">
            "#,
            "",
        );
        let result = videos(&d);
        assert!(matches!(result, Err(Error::ExtractFailed(_))));

        let d = doc(
            r#"
            <meta property="og:video" content="v1">
            <meta property="og:video:type" content="video/mp4">
            <meta property="og:video" content="v2">
            <meta property="og:video:secure_url" content="https://v2">
            <meta property="og:video:type" content="text/html">
            "#,
            "",
        );
        let found = videos(&d).unwrap();
        assert_eq!(found[0].url.as_deref(), Some("v1"));
        assert_eq!(found[0].secure_url.as_deref(), Some("https://v2"));
        assert_eq!(found[1].secure_url, None);
    }

    #[test]
    fn test_videos_type_without_content_fails() {
        let d = doc(r#"<meta property="og:video" content="v1"><meta property="og:video:type">"#, "");
        assert!(matches!(videos(&d), Err(Error::ExtractFailed(_))));
    }

    #[test]
    fn test_extract_full_document() {
        let preview = extract(
            r#"
            <title>Fallback</title>
            <meta property="og:title" content="Rust Blog">
            <meta name="description" content="Empowering everyone">
            <meta property="og:type" content="article">
            <meta property="og:image" content="/logo.svg">
            "#,
            r#"<img src="/ignored.png">"#,
            &PreviewOptions::default(),
        );

        assert_eq!(preview.url, ORIGIN);
        assert_eq!(preview.title, "Rust Blog");
        assert_eq!(preview.description.as_deref(), Some("Empowering everyone"));
        assert_eq!(preview.media_type, "article");
        assert_eq!(preview.images, vec!["https://x.com/logo.svg"]);
        assert!(preview.videos.is_empty());
    }

    #[test]
    fn test_extract_document_is_idempotent() {
        let d = doc(
            r#"<meta property="og:video" content="v"><meta property="og:video:type" content="video/mp4">"#,
            r#"<img src="a.png"><img src="a.png">"#,
        );
        let extractor = MetaExtractor::new();
        let options = PreviewOptions::default();
        let first = extractor.extract_document(&d, &origin(), &options).unwrap();
        let second = extractor.extract_document(&d, &origin(), &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_preview_from_html() {
        let preview = extract_preview("<title>Hi</title>", &origin(), &PreviewOptions::default()).unwrap();
        assert_eq!(preview.title, "Hi");
        assert_eq!(preview.description, None);
    }
}
