//! HTTP page fetching.
//!
//! Provides a blocking HTTP client for downloading vendor pages with a
//! fixed per-request timeout. There are no retries: one failed request is
//! one failed check.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// User-Agent sent when the configuration does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("vercheck/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches vendor pages over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 10-second timeout.
    pub fn new() -> crate::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT, None)
    }

    /// Create a new HTTP fetcher with custom timeout and User-Agent.
    pub fn with_timeout(timeout: Duration, user_agent: Option<&str>) -> crate::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a page body.
    ///
    /// Any non-2xx status is an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Fetching vendor page");

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

/// Short cause-first description of a failed fetch.
///
/// Timeouts and connection failures are named up front, followed by the
/// innermost error text. Status failures read `HTTP <code> ...`.
pub fn describe_failure(err: &anyhow::Error) -> String {
    let cause = err.root_cause().to_string();
    let request_error = err.chain().find_map(|e| e.downcast_ref::<reqwest::Error>());

    match request_error {
        Some(e) if e.is_timeout() => format!("Timed out: {}", cause),
        Some(e) if e.is_connect() => format!("Connection failed: {}", cause),
        _ => cause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_10_seconds() {
        let fetcher = HttpFetcher::new().unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(3), Some("test")).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn user_agent_includes_crate_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("vercheck/"));
        assert!(DEFAULT_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn fetches_page_body() {
        let server = MockServer::start();
        let page = server.mock(|when, then| {
            when.method(GET).path("/page");
            then.status(200).body("<p class=\"path\">1.0</p>");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url("/page")).unwrap();

        page.assert();
        assert!(body.contains("1.0"));
    }

    #[test]
    fn non_success_status_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch(&server.url("/gone")).unwrap_err();
        assert!(err.to_string().contains("404"));
        assert!(describe_failure(&err).starts_with("HTTP 404"));
    }

    #[test]
    fn timeout_is_described_first() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).body("late").delay(Duration::from_secs(2));
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_millis(200), None).unwrap();
        let err = fetcher.fetch(&server.url("/slow")).unwrap_err();
        assert!(describe_failure(&err).starts_with("Timed out"));
    }

    #[test]
    fn refused_connection_is_not_a_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2), None).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").unwrap_err();
        let text = describe_failure(&err);
        assert!(!text.starts_with("Timed out"));
        assert!(!text.contains("127.0.0.1"), "cause comes before the URL: {}", text);
    }

    #[test]
    fn sends_configured_user_agent() {
        let server = MockServer::start();
        let page = server.mock(|when, then| {
            when.method(GET)
                .path("/ua")
                .header("user-agent", "custom-agent");
            then.status(200).body("ok");
        });

        let fetcher =
            HttpFetcher::with_timeout(Duration::from_secs(5), Some("custom-agent")).unwrap();
        fetcher.fetch(&server.url("/ua")).unwrap();
        page.assert();
    }
}
