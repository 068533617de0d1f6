//! Error type definitions.

use std::fmt;
use std::path::{Path, PathBuf};

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for building a request from a target URL.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// The target could not be parsed as a URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The target as given
        url: String,
        /// Parser message
        reason: String,
    },

    /// The URL parsed but has no host to name the storage directory after.
    #[error("URL '{0}' has no host component")]
    MissingHost(String),

    /// Only http and https targets can be archived.
    #[error("Unsupported scheme '{scheme}' for URL '{url}'")]
    UnsupportedScheme {
        /// The target as given
        url: String,
        /// Scheme found in the URL
        scheme: String,
    },

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL exceeds maximum length ({len} > {max})")]
    TooLong {
        /// Length of the target
        len: usize,
        /// Accepted maximum
        max: usize,
    },
}

/// Error types for saving an exchange to disk.
///
/// Both variants carry the path that was being worked on when the failure
/// happened, so callers can report which artifact was lost.
#[derive(Error, Debug)]
pub enum SaveError {
    /// Creating the host directory (or one of its parents) failed.
    #[error("Failed to create directory for '{}': {source}", .path.display())]
    DirectoryCreation {
        /// Artifact path that was being saved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the artifact failed.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// Artifact path that was being saved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// The artifact path attempted.
    pub fn path(&self) -> &Path {
        match self {
            SaveError::DirectoryCreation { path, .. } | SaveError::Write { path, .. } => path,
        }
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            SaveError::DirectoryCreation { source, .. } | SaveError::Write { source, .. } => source,
        }
    }

    /// Consumes the error, returning the attempted path.
    pub fn into_path(self) -> PathBuf {
        match self {
            SaveError::DirectoryCreation { path, .. } | SaveError::Write { path, .. } => path,
        }
    }
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Actionable description of the problem
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}
