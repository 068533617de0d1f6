//! Text rendering of exchanges.

use crate::config::HTTP_VERSION;
use crate::exchange::Exchange;

/// Which rendering of an exchange to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// URL, request line and headers, status line and headers, then the body.
    #[default]
    Full,
    /// The raw body only.
    BodyOnly,
}

impl RenderMode {
    /// Maps a `--no-headers` style flag to a mode.
    pub fn from_no_headers(no_headers: bool) -> Self {
        if no_headers {
            RenderMode::BodyOnly
        } else {
            RenderMode::Full
        }
    }
}

impl Exchange {
    /// Renders the exchange in the requested mode.
    pub fn render(&self, mode: RenderMode) -> Vec<u8> {
        match mode {
            RenderMode::Full => self.render_full(),
            RenderMode::BodyOnly => self.render_body_only(),
        }
    }

    /// Renders the request and response in full.
    ///
    /// ```text
    /// https://example.com/p
    ///
    /// > GET /p HTTP/1.1
    /// > Accept: */*
    ///
    /// < HTTP/1.1 200 OK
    /// < Content-Type: text/plain
    ///
    /// hello
    /// ```
    ///
    /// Header lines are written exactly as recorded. The body is appended
    /// unchanged, with nothing after it.
    pub fn render_full(&self) -> Vec<u8> {
        let request = self.request();
        let mut head = String::new();

        head.push_str(request.url());
        head.push_str("\n\n");

        head.push_str(&format!(
            "> {} {} {}\n",
            request.method(),
            request.path(),
            HTTP_VERSION
        ));
        for h in request.headers() {
            head.push_str(&format!("> {h}\n"));
        }
        head.push('\n');

        head.push_str(&format!("< {} {}\n", HTTP_VERSION, self.status()));
        for h in self.headers() {
            head.push_str(&format!("< {h}\n"));
        }
        head.push('\n');

        let mut out = head.into_bytes();
        out.extend_from_slice(self.body());
        out
    }

    /// Renders only the raw response body.
    pub fn render_body_only(&self) -> Vec<u8> {
        self.body().to_vec()
    }
}
