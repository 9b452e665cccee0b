//! Long URL validation.
//!
//! A candidate is accepted when it matches the shape
//! `http(s)://[www.]label(.label)*.tld[:port][/path][?query][#fragment]`
//! or the scheme-less `www.label(.label)*.tld...`, and also parses as a URL.
//!
//! Accepted URLs are stored verbatim. [`absolute_url`] supplies the missing
//! scheme when a scheme-less one has to be followed.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;

/// Host labels of letters, digits and hyphens, ending in an alphabetic TLD of
/// two or more characters. Without a scheme the host must start with `www.`.
/// The tail excludes whitespace and ASCII control characters, which cannot
/// appear in a `Location` header.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)(?:https?://(?:www\.)?|www\.)[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,}(?::\d{1,5})?(?:[/?#][^\s\x00-\x1F\x7F]*)?$",
    )
    .unwrap()
});

/// Returns `true` if `candidate` is a well-formed http/https URL, or a
/// scheme-less `www.` address.
///
/// Never panics; malformed input simply yields `false`.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://www.example.com/path?q=1"));
/// assert!(is_valid_url("www.example.com"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("/relative/path"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if !URL_REGEX.is_match(candidate) {
        return false;
    }

    let absolute = absolute_url(candidate);

    matches!(Url::parse(&absolute), Ok(url) if matches!(url.scheme(), "http" | "https"))
}

/// Returns `url` with `http://` prepended when it carries no http(s) scheme.
pub fn absolute_url(url: &str) -> Cow<'_, str> {
    if has_http_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{url}"))
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
