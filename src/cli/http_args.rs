// HTTP client configuration arguments
// Licensed under GPL-3.0

use crate::constants::DEFAULT_TIMEOUT_SECS;
use clap::Args;

/// HTTP request configuration options
#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Custom HTTP request headers as "Name: Value" (can be specified
    /// multiple times)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub custom_headers: Vec<String>,

    /// Custom User-Agent string
    #[arg(long = "user-agent", value_name = "STRING")]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Default for HttpArgs {
    fn default() -> Self {
        Self {
            custom_headers: Vec::new(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
