//! URL detection in free-form text.
//!
//! The text is split on whitespace and the first token that is a URL as a
//! whole wins. Tokens with surrounding punctuation (e.g. `(https://x.com)`)
//! do not match.
//!
//! The pattern accepts userinfo without a scheme, so a bare email address
//! such as `bob@example.com` counts as a link to `example.com`.

use regex::Regex;
use std::sync::LazyLock;

/// Optional http(s) scheme, optional userinfo, an IPv4 or domain host, an
/// optional port, then anything after a `/`, `?` or `#`.
static VALID_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^",
        r"(?:https?://)?",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)",
        r"|",
        r"(?:[\p{L}\p{N}](?:[\p{L}\p{N}_-]*[\p{L}\p{N}])?\.)+\p{L}{2,}\.?",
        r")",
        r"(?::\d{2,5})?",
        r"(?:[/?#]\S*)?",
        r"$",
    ))
    .expect("invalid URL pattern")
});

/// Whether `token` is a URL in its entirety.
pub fn is_url(token: &str) -> bool {
    VALID_URL.is_match(token)
}

/// Return the first whitespace-separated token of `text` that is a URL.
pub fn detect_url(text: &str) -> Option<&str> {
    text.split_whitespace().find(|token| is_url(token))
}
