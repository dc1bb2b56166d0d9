// Checklist tables and defaults for the header audit

use std::time::Duration;

/// Security headers audited on every response, in report order.
pub const BASE_CHECKLIST: &[&str] = &[
    "X-Frame-Options",
    "Strict-Transport-Security",
    "X-Content-Type-Options",
    "X-XSS-Protection",
    "Content-Security-Policy",
];

/// Headers appended to the checklist with --extended.
pub const EXTENDED_CHECKLIST: &[&str] = &["Cache-Control", "Pragma", "Expires", "Server"];

/// CSP tokens that weaken the policy. Matched as case-sensitive substrings
/// of the raw header value.
pub const INSECURE_CSP_DIRECTIVES: &[&str] = &["unsafe-inline", "unsafe-eval", "unsafe-dynamic"];

/// Path suffixes treated as static assets by --skip-static.
pub const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".jpg", ".jpeg", ".png", ".gif", ".svg", ".woff", ".woff2", ".ttf", ".eot",
    ".ico",
];

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default per-request timeout as a Duration.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    concat!("headcheck/", env!("CARGO_PKG_VERSION"), " (security header scanner)");

/// Width of the divider printed between per-URL report blocks.
pub const DIVIDER_WIDTH: usize = 62;
