// headcheck - audit security headers across a list of URLs
// Licensed under GPL-3.0

//! headcheck reads candidate URLs from standard input (or a file), issues
//! one GET request per URL, and reports the presence, absence, or
//! misconfiguration of a fixed checklist of security-relevant response
//! headers. Certificate verification is disabled on purpose: the tool is
//! built to probe arbitrary, often misconfigured hosts.

pub mod cli;
pub mod constants;
pub mod error;
pub mod http;
pub mod input;
pub mod output;
pub mod scanner;
pub mod urls;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::ScanError;
pub use crate::scanner::HeaderScanner;

/// Result type for headcheck operations
pub type Result<T> = anyhow::Result<T>;
