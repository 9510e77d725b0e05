//! Resolution of tag attribute values against the page URL.

use url::Url;

/// Resolve `raw` (absolute, root-relative, relative or protocol-relative)
/// against `base`.
///
/// Returns `None` when the value cannot form a URL at all, so callers only
/// ever see absolute URLs.
pub fn resolve_against(base: &Url, raw: &str) -> Option<String> {
    match base.join(raw) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!("skipping unresolvable {:?} on {}: {}", raw, base, e);
            None
        }
    }
}
