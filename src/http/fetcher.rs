// HTTP fetcher - GET requests with relaxed TLS, collecting response headers

use super::headers::ResponseHeaders;
use crate::error::ScanError;
use crate::Result;
use std::time::Duration;
use tracing::warn;

/// Client configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub custom_headers: Vec<(String, String)>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: crate::constants::DEFAULT_TIMEOUT,
            user_agent: crate::constants::DEFAULT_USER_AGENT.to_string(),
            custom_headers: Vec::new(),
        }
    }
}

/// Issues one GET per URL over a shared client. Certificate verification
/// is disabled: the tool audits headers on arbitrary, often misconfigured
/// hosts, so any certificate is accepted.
pub struct HeaderFetcher {
    client: reqwest::Client,
    custom_headers: Vec<(String, String)>,
}

impl HeaderFetcher {
    /// Build the shared client from the configuration.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ScanError::Request)?;

        Ok(Self {
            client,
            custom_headers: config.custom_headers,
        })
    }

    /// GET the URL and capture its status line and headers. The body is
    /// dropped unread. Transport failures surface as errors for the caller
    /// to report; they never abort the batch.
    pub async fn fetch(&self, url: &str) -> Result<ResponseHeaders> {
        let mut request = self.client.get(url);

        for (name, value) in &self.custom_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(ScanError::Request)?;

        let status = response.status();
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };

        let pairs: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        Ok(ResponseHeaders::new(status_line, pairs))
    }
}

/// Parse one "Name: Value" header argument, splitting at the first colon.
pub fn parse_custom_header(raw: &str) -> std::result::Result<(String, String), ScanError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ScanError::InvalidHeader {
            raw: raw.to_string(),
        }),
    }
}

/// Parse the repeatable --header arguments. Malformed entries are reported
/// and skipped; the request proceeds with the valid ones.
pub fn parse_custom_headers(raw: &[String]) -> Vec<(String, String)> {
    raw.iter()
        .filter_map(|header| match parse_custom_header(header) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("{}", err);
                None
            }
        })
        .collect()
}
