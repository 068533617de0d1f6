//! Error types.
//!
//! - `SaveError`: directory creation or artifact write failures, with the attempted path
//! - `RequestError`: a target URL that cannot be archived
//! - `InitializationError`: logger setup failures
//! - `ConfigValidationError`: invalid configuration values

mod types;

pub use types::{ConfigValidationError, InitializationError, RequestError, SaveError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_save_error_exposes_path() {
        let err = SaveError::Write {
            path: PathBuf::from("out/example.com/example_com"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Path::new("out/example.com/example_com"));
        assert_eq!(err.io_error().kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_save_error_display_mentions_path() {
        let err = SaveError::DirectoryCreation {
            path: PathBuf::from("out/example.com/abc"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/example.com/abc"), "got: {msg}");
        assert!(msg.contains("file exists"), "got: {msg}");
    }

    #[test]
    fn test_save_error_source_chain() {
        use std::error::Error;
        let err = SaveError::Write {
            path: PathBuf::from("x"),
            source: io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert_eq!(err.into_path(), PathBuf::from("x"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = ConfigValidationError::new("output_dir", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'output_dir': must not be empty"
        );
    }
}
