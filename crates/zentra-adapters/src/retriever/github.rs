//! GitHub content retriever using reqwest's blocking client.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, instrument, warn};
use zentra_core::{
    application::{ApplicationError, ContentRetriever, TreeEntry},
    error::{Context, ZentraResult},
};

use super::payload::PayloadParser;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads directory listings and files from GitHub tree and blob pages.
#[derive(Debug, Clone)]
pub struct GithubRetriever {
    client: Client,
    parser: PayloadParser,
}

impl GithubRetriever {
    pub fn new(timeout: Duration) -> ZentraResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("zentra/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            parser: PayloadParser::new()?,
        })
    }

    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> ZentraResult<String> {
        let response = self.client.get(url).send().map_err(|e| {
            warn!(error = %e, "request failed");
            ApplicationError::RequestFailed {
                status: e.status().map_or(0, |s| s.as_u16()),
                url: url.to_string(),
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApplicationError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response
            .text()
            .map_err(|e| ApplicationError::MalformedPayload {
                url: url.to_string(),
                reason: format!("unreadable body: {e}"),
            })?;
        debug!(bytes = body.len(), "fetched");
        Ok(body)
    }
}

impl ContentRetriever for GithubRetriever {
    fn list_directory(&self, url: &str) -> ZentraResult<Vec<TreeEntry>> {
        let html = self.fetch(url)?;
        self.parser.listing(url, &html)
    }

    fn file_lines(&self, url: &str) -> ZentraResult<Vec<String>> {
        let html = self.fetch(url)?;
        self.parser.raw_lines(url, &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_timeout() {
        assert!(GithubRetriever::new(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn unreachable_host_is_request_failure() {
        let retriever = GithubRetriever::new(Duration::from_secs(2)).unwrap();
        let err = retriever
            .list_directory("http://127.0.0.1:9/components")
            .unwrap_err();
        assert!(matches!(
            err,
            zentra_core::error::ZentraError::Application(ApplicationError::RequestFailed {
                status: 0,
                ..
            })
        ));
    }
}
