// Scanner - sequential fetch-and-audit pass over the target list

use crate::cli::Args;
use crate::constants::DEFAULT_USER_AGENT;
use crate::http::fetcher::{parse_custom_headers, FetcherConfig, HeaderFetcher};
use crate::http::headers::audit_headers;
use crate::input;
use crate::output::ConsoleReporter;
use crate::urls;
use crate::Result;
use std::time::Duration;
use tracing::info;

/// Sequential security-header scanner. Owns the parsed CLI arguments and
/// drives the whole pass: input, normalization, fetch, audit, report.
///
/// URLs are processed one at a time, in input order. Each iteration is
/// independent; a failed fetch is reported and the pass moves on.
pub struct HeaderScanner {
    args: Args,
}

impl HeaderScanner {
    /// Create a scanner from parsed CLI arguments.
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Run the full pass. Per-URL failures never abort the batch; only a
    /// startup failure (unreadable input file, client build) is an error.
    pub async fn run(&self) -> Result<()> {
        let reporter = ConsoleReporter::new(self.args.output.no_color);
        reporter.banner();

        let targets = self.collect_targets()?;
        if targets.is_empty() {
            info!("no targets to scan");
            return Ok(());
        }
        info!("scanning {} target(s)", targets.len());

        let fetcher = HeaderFetcher::new(self.fetcher_config())?;
        let checklist = self.args.checklist();

        for url in &targets {
            match fetcher.fetch(url).await {
                Ok(response) => {
                    reporter.target_ok(url);
                    reporter.status_line(response.status());

                    for finding in audit_headers(&response, &checklist) {
                        reporter.finding(&finding);
                    }

                    reporter.divider();
                }
                Err(err) => reporter.target_error(url, &err),
            }
        }

        Ok(())
    }

    /// Read targets and apply scheme resolution and the gated filters.
    /// Schemes are resolved before normalization so bare hostnames survive
    /// deduplication.
    fn collect_targets(&self) -> Result<Vec<String>> {
        let raw = match &self.args.input_file {
            Some(path) => input::read_targets_from_file(path)?,
            None => input::read_targets_from_stdin(),
        };

        let mut targets: Vec<String> =
            raw.iter().map(|line| urls::ensure_scheme(line)).collect();

        if self.args.scan.dedupe {
            targets = urls::deduplicate(&targets);
        }

        if self.args.scan.skip_static {
            targets = urls::remove_static(&targets);
        }

        Ok(targets)
    }

    /// Assemble the client configuration from CLI arguments.
    fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            timeout: Duration::from_secs(self.args.http.timeout),
            user_agent: self
                .args
                .http
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            custom_headers: parse_custom_headers(&self.args.http.custom_headers),
        }
    }
}
