// Terminal reporter - colorized per-URL report blocks

use crate::constants::DIVIDER_WIDTH;
use crate::http::headers::Finding;
use colored::Colorize;
use std::fmt::Display;

/// Stateless console reporter. Color is cosmetic only: disabling it
/// changes no program logic and no exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a reporter, applying the global color override.
    pub fn new(no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }

        Self
    }

    /// Tool banner and introduction line.
    pub fn banner(&self) {
        println!("headcheck v{}", env!("CARGO_PKG_VERSION"));
        self.info("This tool will check the security headers of the provided URLs");
    }

    /// `[INF]` informational line.
    pub fn info(&self, message: &str) {
        println!("[{}] {}", "INF".blue(), message);
    }

    /// `[OK]` line announcing a fetched target.
    pub fn target_ok(&self, url: &str) {
        println!("[{}] {}", "OK".green(), url);
    }

    /// `[ERR]` line for a failed fetch.
    pub fn target_error(&self, url: &str, error: &dyn Display) {
        println!("[{}] {}: {}", "ERR".red(), url, error);
    }

    /// Response status line.
    pub fn status_line(&self, status: &str) {
        println!("- Status Code: {}", status);
    }

    /// One checklist finding.
    pub fn finding(&self, finding: &Finding) {
        match finding {
            Finding::Missing { name } => {
                println!("- Missing {}", name.red());
            }
            Finding::Present { name, value } => {
                println!("- {}: {}", name.green(), value);
            }
            Finding::InsecureCsp { value, .. } => {
                println!("- {}: {}", "Content-Security-Policy".green(), value.red());
            }
        }
    }

    /// Divider between per-URL report blocks.
    pub fn divider(&self) {
        println!("{}", "-".repeat(DIVIDER_WIDTH));
    }
}
