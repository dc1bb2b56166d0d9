// Core scanning arguments
// Licensed under GPL-3.0

use clap::Args;

/// Target filtering and checklist options
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Deduplicate URLs by scheme, host and path before scanning
    #[arg(long = "dedupe")]
    pub dedupe: bool,

    /// Drop URLs pointing at static assets (.js, .css, images, fonts)
    #[arg(long = "skip-static")]
    pub skip_static: bool,

    /// Also audit Cache-Control, Pragma, Expires and Server
    #[arg(long = "extended")]
    pub extended: bool,
}
