//! CSRF token plumbing.
//!
//! The server sets a `csrftoken` cookie and expects its value back in an
//! `X-CSRFToken` header on every state-changing same-origin request.
//! Absolute URLs are someone else's origin and must never receive the
//! header. A missing cookie is not an error here; the request goes out
//! bare and the server rejects it.

use percent_encoding::percent_decode_str;

/// Name of the cookie carrying the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the token is echoed back in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// An anti-forgery token read from the cookie jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps an already-decoded token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the value to place in the [`CSRF_HEADER`] header.
    pub fn header_value(&self) -> &str {
        &self.0
    }
}

/// Extracts the CSRF token from a `Cookie` header string.
///
/// Cookies are split on `;`, each entry trimmed, and the first one named
/// `csrftoken` wins. The value is percent-decoded the way the page's
/// `decodeURIComponent` call does; a value that is not valid UTF-8 after
/// decoding is treated as absent.
pub fn token_from_cookie_header(header: &str) -> Option<CsrfToken> {
    if header.is_empty() {
        return None;
    }
    for cookie in header.split(';') {
        let cookie = cookie.trim();
        if let Some(raw) = cookie.strip_prefix(CSRF_COOKIE) {
            if let Some(value) = raw.strip_prefix('=') {
                let decoded = percent_decode_str(value).decode_utf8().ok()?;
                return Some(CsrfToken(decoded.into_owned()));
            }
        }
    }
    None
}

/// Returns whether a request URL leaves the page's origin.
///
/// The page treats any absolute `http:`/`https:` URL as cross-origin and
/// everything else (paths, query-relative URLs) as same-origin.
pub fn is_cross_origin(url: &str) -> bool {
    url.starts_with("http:") || url.starts_with("https:")
}

/// Returns the header value to attach for a request to `url`, if any.
///
/// `None` either because the URL is cross-origin or because no token is
/// available.
pub fn header_for(token: Option<&CsrfToken>, url: &str) -> Option<String> {
    if is_cross_origin(url) {
        return None;
    }
    token.map(|t| t.header_value().to_string())
}
