// URL normalization - scheme resolution, deduplication, static-asset filtering

use crate::constants::STATIC_EXTENSIONS;
use std::collections::HashSet;
use tracing::warn;
use url::Url;

/// Ensure the string is usable as an absolute request target. Anything
/// that does not parse as an http(s) URL gets an https:// prefix.
pub fn ensure_scheme(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => raw.to_string(),
        _ => format!("https://{}", raw),
    }
}

/// Deduplicate URLs by scheme, host and path. The first occurrence wins,
/// input order is preserved, and the returned entries carry no query or
/// fragment. Unparseable entries are dropped with a warning.
pub fn deduplicate(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for raw in urls {
        let base = match parse_base(raw) {
            Some(base) => base,
            None => continue,
        };

        if seen.insert(base.clone()) {
            result.push(base);
        }
    }

    result
}

/// Drop URLs whose path ends in a static-asset extension. Surviving
/// entries keep their original query string and are deduplicated by the
/// resulting URL, preserving input order.
pub fn remove_static(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for raw in urls {
        let parsed = match Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("dropping unparseable URL '{}': {}", raw, err);
                continue;
            }
        };

        let mut base = match base_url(&parsed) {
            Some(base) => base,
            None => {
                warn!("dropping URL without a host '{}'", raw);
                continue;
            }
        };

        if STATIC_EXTENSIONS
            .iter()
            .any(|ext| parsed.path().ends_with(ext))
        {
            continue;
        }

        if let Some(query) = parsed.query() {
            if !query.is_empty() {
                base.push('?');
                base.push_str(query);
            }
        }

        if seen.insert(base.clone()) {
            result.push(base);
        }
    }

    result
}

/// Parse a raw entry down to its canonical base, warning on failure.
fn parse_base(raw: &str) -> Option<String> {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("dropping unparseable URL '{}': {}", raw, err);
            return None;
        }
    };

    match base_url(&parsed) {
        Some(base) => Some(base),
        None => {
            warn!("dropping URL without a host '{}'", raw);
            None
        }
    }
}

/// Canonical base: scheme://host[:port]/path. The port is kept only when
/// explicit in the input.
fn base_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    Some(match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    })
}
