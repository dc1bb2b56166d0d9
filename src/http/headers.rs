// Security header audit - checklist presence and CSP directive checks

use crate::constants::INSECURE_CSP_DIRECTIVES;
use std::collections::HashMap;

const CSP_HEADER: &str = "Content-Security-Policy";

/// Case-insensitive view of a response's headers: lowercased name mapped
/// to the values in arrival order, plus the status line text. Scoped to
/// one fetch-and-report cycle.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders {
    status: String,
    headers: HashMap<String, Vec<String>>,
}

impl ResponseHeaders {
    /// Build a view from raw header pairs, lowercasing names.
    pub fn new(status: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            headers.entry(name.to_lowercase()).or_default().push(value);
        }

        Self {
            status: status.into(),
            headers,
        }
    }

    /// Status line text, e.g. "200 OK".
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Values recorded for a header, looked up case-insensitively.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.headers.get(&name.to_lowercase()).map(Vec::as_slice)
    }
}

/// Single audit outcome for one checklist header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Header absent from the response
    Missing { name: &'static str },
    /// Header present; multi-valued headers are joined with a single space
    Present { name: &'static str, value: String },
    /// CSP value contains a weakening directive; the value is the raw CSP
    /// with multiple header values concatenated without a separator
    InsecureCsp {
        directive: &'static str,
        value: String,
    },
}

/// Audit a response against the checklist, emitting findings in checklist
/// order. For Content-Security-Policy the insecure-directive findings come
/// first, followed by the full value regardless of what matched.
pub fn audit_headers(response: &ResponseHeaders, checklist: &[&'static str]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for &name in checklist {
        let values = match response.values(name) {
            Some(values) => values,
            None => {
                findings.push(Finding::Missing { name });
                continue;
            }
        };

        if name.eq_ignore_ascii_case(CSP_HEADER) {
            // Multiple CSP header values are concatenated with no separator
            // before the scan; other headers join with a space for display.
            let value = values.concat();

            for &directive in INSECURE_CSP_DIRECTIVES {
                if value.contains(directive) {
                    findings.push(Finding::InsecureCsp {
                        directive,
                        value: value.clone(),
                    });
                }
            }

            findings.push(Finding::Present { name, value });
        } else {
            findings.push(Finding::Present {
                name,
                value: values.join(" "),
            });
        }
    }

    findings
}
