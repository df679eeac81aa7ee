//! Error types for the engine, pattern files and startup configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Board width or height was zero, or too large for signed coordinates.
    #[error("invalid board dimensions {width}x{height}: each side must be between 1 and 2^31-1")]
    InvalidDimensions {
        width: u32,
        height: u32,
    },
}

/// Errors raised while reading or writing a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern file does not exist.
    #[error("pattern file {} not found", .path.display())]
    NotFound {
        path: PathBuf,
    },

    /// A data line could not be parsed as `x,y`.
    #[error("line {line}: {reason} in {content:?}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        reason: String,
    },

    /// Any other filesystem failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Startup configuration errors. These are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value}")]
    NonPositive {
        name: &'static str,
        value: u32,
    },
}
