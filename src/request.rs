//! The request side of a captured exchange.
//!
//! A `Request` holds what is needed to render the request half of an archive
//! entry and to decide which host directory it lands in. Header lines are
//! kept exactly as given, in order.

use log::debug;

use crate::config::{DEFAULT_METHOD, MAX_URL_LENGTH};
use crate::error_handling::RequestError;

/// A request that was sent to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    url: String,
    path: String,
    headers: Vec<String>,
    hostname: String,
}

impl Request {
    /// Builds a request for `target`, deriving the path and hostname from it.
    ///
    /// Targets without a scheme get `https://` prepended. The path includes
    /// the query string when there is one and is `/` for a bare host.
    ///
    /// # Errors
    ///
    /// Returns a `RequestError` if the target is too long, does not parse,
    /// uses a scheme other than http/https, or has no host.
    ///
    /// # Examples
    ///
    /// ```
    /// use exchange_archive::Request;
    ///
    /// let req = Request::new("GET", "example.com/search?q=rust").unwrap();
    /// assert_eq!(req.url(), "https://example.com/search?q=rust");
    /// assert_eq!(req.path(), "/search?q=rust");
    /// assert_eq!(req.hostname(), "example.com");
    /// ```
    pub fn new(method: &str, target: &str) -> Result<Self, RequestError> {
        if target.len() > MAX_URL_LENGTH {
            return Err(RequestError::TooLong {
                len: target.len(),
                max: MAX_URL_LENGTH,
            });
        }

        let normalized = if has_explicit_scheme(target) {
            target.to_string()
        } else {
            format!("https://{target}")
        };

        // the https:// prefix can push a target over the limit
        if normalized.len() > MAX_URL_LENGTH {
            return Err(RequestError::TooLong {
                len: normalized.len(),
                max: MAX_URL_LENGTH,
            });
        }

        let parsed = url::Url::parse(&normalized).map_err(|e| RequestError::InvalidUrl {
            url: target.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(RequestError::UnsupportedScheme {
                    url: target.to_string(),
                    scheme: other.to_string(),
                })
            }
        }

        let hostname = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| RequestError::MissingHost(target.to_string()))?
            .to_string();

        let mut path = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            path.push('?');
            path.push_str(query);
        }

        let method = if method.is_empty() {
            DEFAULT_METHOD.to_string()
        } else {
            method.to_string()
        };

        debug!("Built {method} request for {normalized} (host {hostname})");

        Ok(Self {
            method,
            url: normalized,
            path,
            headers: Vec::new(),
            hostname,
        })
    }

    /// Builds a request from already-derived parts, without parsing.
    ///
    /// `hostname` is used verbatim as a directory name when saving, so it
    /// must already be safe to use as a single path segment.
    pub fn from_parts(
        method: impl Into<String>,
        url: impl Into<String>,
        path: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            path: path.into(),
            headers: Vec::new(),
            hostname: hostname.into(),
        }
    }

    /// Appends a pre-formatted `Name: value` header line.
    pub fn with_header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    /// Appends several header lines, keeping their order.
    pub fn with_headers<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Full URL of the request.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request path, including the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Header lines in the order they were added.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Hostname derived from the URL.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

/// Whether `target` starts with `<scheme>://`.
///
/// Only the text before the first `://` is considered, and it must be a valid
/// scheme (a letter followed by letters, digits, `+`, `-` or `.`), so a URL
/// embedded in a query string does not count.
fn has_explicit_scheme(target: &str) -> bool {
    let Some((scheme, _)) = target.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
