// HTTP module - response fetching and security header audit

pub mod fetcher;
pub mod headers;

pub use fetcher::{parse_custom_headers, FetcherConfig, HeaderFetcher};
pub use headers::{audit_headers, Finding, ResponseHeaders};
