// CLI module - command line interface and argument parsing
// Licensed under GPL-3.0

use crate::constants::{BASE_CHECKLIST, EXTENDED_CHECKLIST};
use clap::Parser;
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod http_args;
mod output_args;
mod scan_args;

// Re-export sub-structs
pub use http_args::HttpArgs;
pub use output_args::OutputArgs;
pub use scan_args::ScanArgs;

/// headcheck - audit security headers across a list of URLs
///
/// Targets are read from standard input, one per line, unless --file is
/// given. All flags compose; there are no mutually exclusive modes.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "headcheck")]
#[command(about = "Audit security headers across a list of URLs", long_about = None)]
pub struct Args {
    /// Input file with targets, one per line (defaults to stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    // ============ Scanning Options ============
    #[command(flatten)]
    pub scan: ScanArgs,

    // ============ HTTP Settings ============
    #[command(flatten)]
    pub http: HttpArgs,

    // ============ Output and Display ============
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Validate CLI arguments for logical consistency
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.http.timeout == 0 {
            anyhow::bail!("--timeout must be at least 1 second");
        }

        Ok(())
    }

    /// Checklist for this run: the base headers, with the extended set
    /// appended when --extended is given.
    pub fn checklist(&self) -> Vec<&'static str> {
        let mut list: Vec<&'static str> = BASE_CHECKLIST.to_vec();
        if self.scan.extended {
            list.extend_from_slice(EXTENDED_CHECKLIST);
        }
        list
    }
}
