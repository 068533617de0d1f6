//! Configuration constants.

/// Default storage root for saved exchanges.
pub const DEFAULT_OUTPUT_DIR: &str = "./out";

/// Permission bits for directories created under the storage root
/// (owner rwx, group r-x, others none).
pub const DIR_MODE: u32 = 0o750;

/// Permission bits for saved artifacts (owner rw-, group r--, others none).
pub const FILE_MODE: u32 = 0o640;

/// Protocol version written on the request and status lines.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Method used when none is given.
pub const DEFAULT_METHOD: &str = "GET";

/// Status line used by the CLI when none is given.
pub const DEFAULT_STATUS: &str = "200 OK";

/// Maximum URL length accepted when building a request.
pub const MAX_URL_LENGTH: usize = 2048;
