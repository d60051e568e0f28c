//! # Error Types
//!
//! This module defines the error type used throughout the printml library.

use thiserror::Error;

/// Main error type for printml operations
#[derive(Debug, Error)]
pub enum Error {
    /// The markup document is not well-formed XML
    #[error("Malformed markup: {0}")]
    Parse(#[from] roxmltree::Error),

    /// Elements nest deeper than the parser accepts
    #[error("Markup nests deeper than {limit} elements")]
    TooDeep { limit: usize },

    /// The request body is not UTF-8 text
    #[error("Markup is not valid UTF-8: {0}")]
    Encoding(std::str::Utf8Error),

    /// A numeric attribute could not be read as a byte-sized integer
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{tag}>")]
    InvalidAttribute {
        tag: String,
        attribute: &'static str,
        value: String,
    },

    /// The printer could not be opened or stopped accepting data
    #[error("Device unavailable: {0}")]
    Device(String),

    /// The interpretation pass was stopped between two node visits
    #[error("Interpretation cancelled")]
    Cancelled,

    /// Invalid command line or server configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for printml operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
