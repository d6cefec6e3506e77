//! URL path helpers used to derive catalog metadata.
//!
//! Titles and keywords come only from the URL string itself; nothing here
//! touches the network.

use std::borrow::Cow;
use url::Url;

/// Check if a URL is an absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Raw (still percent-encoded) path of a URL.
///
/// Relative or unparseable inputs are treated as a bare path: anything after
/// `?` or `#` is dropped.
pub fn raw_path(url: &str) -> Cow<'_, str> {
    match Url::parse(url) {
        Ok(parsed) => Cow::Owned(parsed.path().to_string()),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            Cow::Borrowed(&url[..end])
        }
    }
}

/// Percent-decode a string, falling back to lossy UTF-8 for invalid sequences.
pub fn percent_decode(s: &str) -> String {
    match urlencoding::decode(s) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned(),
    }
}

/// Decoded path of a URL, e.g. `/category/گلدان/` for
/// `https://x.com/category/%DA%AF%D9%84%D8%AF%D8%A7%D9%86/`.
pub fn decoded_path(url: &str) -> String {
    percent_decode(&raw_path(url))
}
