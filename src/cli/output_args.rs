// Output and display arguments
// Licensed under GPL-3.0

use clap::Args;

/// Output and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
