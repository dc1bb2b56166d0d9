//! Pipeline integration tests
//!
//! Exercises the public library surface with real Args values and real
//! network types: target collection semantics, checklist composition,
//! custom header handling, and failure isolation against an unresolvable
//! host. No mocks or stubs.

use headcheck::cli::Args;
use headcheck::constants::{BASE_CHECKLIST, EXTENDED_CHECKLIST};
use headcheck::http::fetcher::{parse_custom_headers, FetcherConfig, HeaderFetcher};
use headcheck::http::headers::{audit_headers, Finding, ResponseHeaders};
use headcheck::urls;
use std::time::Duration;

// ============================================================================
// CLI and Checklist Composition
// ============================================================================

#[test]
fn default_args_audit_the_base_checklist() {
    let args = Args::default();

    assert_eq!(args.checklist(), BASE_CHECKLIST);
}

#[test]
fn extended_flag_appends_the_extended_headers() {
    let mut args = Args::default();
    args.scan.extended = true;

    let checklist = args.checklist();
    assert_eq!(&checklist[..BASE_CHECKLIST.len()], BASE_CHECKLIST);
    assert_eq!(&checklist[BASE_CHECKLIST.len()..], EXTENDED_CHECKLIST);
}

// ============================================================================
// URL Normalization Pipeline
// ============================================================================

#[test]
fn dedupe_and_skip_static_compose() {
    let raw = [
        "example.com/search?q=1",
        "example.com/search?q=2",
        "example.com/bundle.js",
        "example.com/login",
    ];

    let resolved: Vec<String> = raw.iter().map(|r| urls::ensure_scheme(r)).collect();
    let deduped = urls::deduplicate(&resolved);
    let scanned = urls::remove_static(&deduped);

    assert_eq!(
        scanned,
        vec!["https://example.com/search", "https://example.com/login"]
    );
}

#[test]
fn deduplicate_never_repeats_a_canonical_key() {
    let raw: Vec<String> = [
        "https://a.example/x?1",
        "https://a.example/x?2",
        "http://a.example/x",
        "https://a.example/y",
        "https://a.example/x",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let result = urls::deduplicate(&raw);

    let mut sorted = result.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), result.len());
    assert_eq!(
        result,
        vec![
            "https://a.example/x",
            "http://a.example/x",
            "https://a.example/y"
        ]
    );
}

// ============================================================================
// Custom Header Handling
// ============================================================================

#[test]
fn custom_header_value_keeps_colons_after_the_first() {
    let raw = vec!["Authorization: Bearer a:b:c".to_string()];

    let parsed = parse_custom_headers(&raw);
    assert_eq!(
        parsed,
        vec![("Authorization".to_string(), "Bearer a:b:c".to_string())]
    );
}

#[test]
fn malformed_header_is_skipped_while_valid_ones_survive() {
    let raw = vec!["X-Test".to_string(), "X-Valid: yes".to_string()];

    let parsed = parse_custom_headers(&raw);
    assert_eq!(parsed, vec![("X-Valid".to_string(), "yes".to_string())]);
}

// ============================================================================
// Audit Semantics
// ============================================================================

#[test]
fn missing_header_has_no_value_line() {
    let response = ResponseHeaders::new("200 OK", Vec::new());

    let findings = audit_headers(&response, BASE_CHECKLIST);
    assert_eq!(findings.len(), BASE_CHECKLIST.len());
    assert!(findings
        .iter()
        .all(|f| matches!(f, Finding::Missing { .. })));
}

#[test]
fn insecure_csp_is_flagged_and_full_value_still_shown() {
    let csp = "default-src 'self'; script-src 'unsafe-inline'";
    let response = ResponseHeaders::new(
        "200 OK",
        vec![("Content-Security-Policy".to_string(), csp.to_string())],
    );

    let findings = audit_headers(&response, BASE_CHECKLIST);

    let insecure = findings
        .iter()
        .find(|f| matches!(f, Finding::InsecureCsp { .. }));
    assert!(matches!(
        insecure,
        Some(Finding::InsecureCsp {
            directive: "unsafe-inline",
            ..
        })
    ));
    assert!(findings.contains(&Finding::Present {
        name: "Content-Security-Policy",
        value: csp.to_string(),
    }));
}

#[test]
fn extended_checklist_covers_caching_and_server_headers() {
    let mut args = Args::default();
    args.scan.extended = true;

    let response = ResponseHeaders::new(
        "200 OK",
        vec![
            ("Server".to_string(), "nginx".to_string()),
            ("Cache-Control".to_string(), "no-store".to_string()),
        ],
    );

    let findings = audit_headers(&response, &args.checklist());
    assert!(findings.contains(&Finding::Present {
        name: "Server",
        value: "nginx".to_string(),
    }));
    assert!(findings.contains(&Finding::Present {
        name: "Cache-Control",
        value: "no-store".to_string(),
    }));
    assert!(findings.contains(&Finding::Missing { name: "Pragma" }));
    assert!(findings.contains(&Finding::Missing { name: "Expires" }));
}

// ============================================================================
// End-to-End Failure Isolation
// ============================================================================

#[tokio::test]
async fn unresolvable_host_fails_without_audit_output() {
    let fetcher = HeaderFetcher::new(FetcherConfig {
        timeout: Duration::from_secs(5),
        user_agent: "headcheck-test".to_string(),
        custom_headers: Vec::new(),
    })
    .unwrap();

    // RFC 2606 reserves .invalid, so this never resolves
    let result = fetcher.fetch("https://no-such-host.invalid/").await;
    assert!(result.is_err());
}
