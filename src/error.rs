// Error types for headcheck
//
// Structured error types using thiserror, alongside the crate-wide
// anyhow::Result alias. Every failure is isolated to the input line or URL
// that caused it; nothing here aborts a batch.

use std::io;
use thiserror::Error;

/// Main error type for headcheck operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Invalid input from the user or configuration
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Custom header argument without a "Name: Value" shape
    #[error("Invalid header format '{raw}', expected 'Name: Value'")]
    InvalidHeader { raw: String },

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Transport-level request failures (DNS, refused, timeout, TLS)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// I/O error reading targets
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}
