//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_OUTPUT_DIR;
use crate::error_handling::ConfigValidationError;
use crate::exchange::RenderMode;
use crate::storage::Naming;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Archive configuration.
///
/// Can be constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```
/// use exchange_archive::ArchiveConfig;
/// use std::path::PathBuf;
///
/// let config = ArchiveConfig {
///     output_dir: PathBuf::from("captures"),
///     static_output: true,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Storage root; each host gets a subdirectory beneath it
    pub output_dir: PathBuf,

    /// Name files after the hostname instead of the content digest
    pub static_output: bool,

    /// Save only the response body
    pub no_headers: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            static_output: false,
            no_headers: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl ArchiveConfig {
    /// Naming mode selected by `static_output`.
    pub fn naming(&self) -> Naming {
        Naming::from_static_output(self.static_output)
    }

    /// Render mode selected by `no_headers`.
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_no_headers(self.no_headers)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field if the
    /// output directory is empty or already exists as something other than a
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "output_dir",
                "output_dir must not be empty (pass a directory as OUTPUT_DIR, e.g. `save ./out`)",
            ));
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(ConfigValidationError::new(
                "output_dir",
                format!(
                    "output_dir '{}' exists but is not a directory",
                    self.output_dir.display()
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = ArchiveConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./out"));
        assert!(!config.static_output);
        assert!(!config.no_headers);
        assert_eq!(config.naming(), Naming::ContentHash);
        assert_eq!(config.render_mode(), RenderMode::Full);
    }

    #[test]
    fn test_config_flags_select_modes() {
        let config = ArchiveConfig {
            static_output: true,
            no_headers: true,
            ..Default::default()
        };
        assert_eq!(config.naming(), Naming::Static);
        assert_eq!(config.render_mode(), RenderMode::BodyOnly);
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = ArchiveConfig {
            output_dir: PathBuf::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "output_dir");
        assert!(err.message.contains("must not be empty"));
        assert!(err.message.contains("OUTPUT_DIR"));
        assert!(!err.message.contains("--output-dir"));
    }

    #[test]
    fn test_validate_rejects_file_as_output_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ArchiveConfig {
            output_dir: file.path().to_path_buf(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "output_dir");
        assert!(err.message.contains("not a directory"));
    }

    #[test]
    fn test_validate_accepts_missing_output_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ArchiveConfig {
            output_dir: dir.path().join("not-yet-created"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
