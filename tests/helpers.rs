// Shared test helpers for building exchanges.
//
// Used across multiple test files to reduce duplication.

use exchange_archive::{Exchange, Request};

/// The exchange used throughout: `GET /p` with two request headers, one
/// response header and body `hello`.
#[allow(dead_code)] // Used by other test files
pub fn sample_exchange() -> Exchange {
    let request = Request::new("GET", "https://example.com/p")
        .expect("sample URL should parse")
        .with_headers(["A: 1", "B: 2"]);
    Exchange::new(request)
        .with_status("200 OK", 200)
        .with_header("X: y")
        .with_body("hello")
}

/// An exchange for `host` with the given body.
#[allow(dead_code)] // Used by other test files
pub fn exchange_for(host: &str, body: &str) -> Exchange {
    let request =
        Request::new("GET", &format!("https://{host}/")).expect("host should parse");
    Exchange::new(request)
        .with_status("200 OK", 200)
        .with_header("Content-Type: text/plain")
        .with_body(body.to_string())
}
