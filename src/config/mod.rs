//! Archive configuration and constants.
//!
//! This module provides:
//! - Configuration constants (permissions, defaults, limits)
//! - Config types and validation
//! - Log level and format options shared with the CLI

mod constants;
mod types;

pub use constants::*;
pub use types::{ArchiveConfig, LogFormat, LogLevel};
