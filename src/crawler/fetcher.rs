//! HTTP fetcher implementation
//!
//! This module handles page requests for the crawler: building the shared
//! HTTP client and performing single GET fetches with per-request user
//! agents. There is no retry logic anywhere: a non-2xx response or transport
//! error permanently abandons the URL.

use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// Timeout for a single page fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a single page fetch
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server responded outside the 2xx range
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, DNS failure)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the shared HTTP client
///
/// No default user agent is set; one is chosen from the configured pool per
/// request.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once with the given user agent
///
/// Any 2xx status is a success; everything else is recorded and the URL is
/// abandoned. Errors are classified for logging only.
pub async fn fetch_url(client: &Client, url: &str, user_agent: &str) -> FetchResult {
    match client.get(url).header(USER_AGENT, user_agent).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };

            FetchResult::NetworkError { error }
        }
    }
}
