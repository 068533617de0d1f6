//! Captured request/response exchanges.
//!
//! An `Exchange` is populated once the request has completed (or failed) and
//! is only read from afterwards: rendering and saving never modify it.

mod render;

use std::fmt;

pub use render::RenderMode;

use crate::request::Request;

/// A completed request together with the response it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    request: Request,
    status: String,
    status_code: u16,
    headers: Vec<String>,
    body: Vec<u8>,
    error: Option<String>,
}

impl Exchange {
    /// Starts an exchange for `request` with an empty response.
    pub fn new(request: Request) -> Self {
        Self {
            request,
            status: String::new(),
            status_code: 0,
            headers: Vec::new(),
            body: Vec::new(),
            error: None,
        }
    }

    /// An exchange whose request failed before a response was obtained.
    ///
    /// Status, headers and body stay empty; the exchange can still be
    /// rendered and saved.
    pub fn failed(request: Request, error: impl Into<String>) -> Self {
        Self::new(request).with_error(error)
    }

    /// Sets the status line text (e.g. `200 OK`) and the numeric code.
    pub fn with_status(mut self, status: impl Into<String>, status_code: u16) -> Self {
        self.status = status.into();
        self.status_code = status_code;
        self
    }

    /// Appends a pre-formatted response header line.
    pub fn with_header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    /// Appends several response header lines, keeping their order.
    pub fn with_headers<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Sets the raw response body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Records an upstream failure.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Numeric status code; informational only.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.render_full()))
    }
}
