//! exchange_archive library: rendering and archiving of captured HTTP exchanges
//!
//! A completed request/response pair is rendered to a canonical text form and
//! written to `<root>/<hostname>/<file name>`. By default the file name is the
//! SHA-1 of the rendered bytes, so saving the same exchange twice is a no-op
//! overwrite and distinct responses from one host never collide.
//!
//! # Example
//!
//! ```no_run
//! use exchange_archive::{Exchange, Request};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = Request::new("GET", "https://example.com/p")?
//!     .with_header("Accept: */*");
//! let exchange = Exchange::new(request)
//!     .with_status("200 OK", 200)
//!     .with_header("Content-Type: text/plain")
//!     .with_body("hello");
//!
//! let path = exchange.save("out", false, false)?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error_handling;
mod exchange;
pub mod initialization;
mod request;
pub mod storage;

// Re-export public API
pub use config::{ArchiveConfig, LogFormat, LogLevel};
pub use error_handling::{ConfigValidationError, RequestError, SaveError};
pub use exchange::{Exchange, RenderMode};
pub use request::Request;
pub use storage::{Archive, Naming};
