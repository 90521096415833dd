//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests returning page markup decoded as UTF-8
//! - Bounded retries for transient failures
//! - Error classification

use crate::config::Config;
use crate::crawler::politeness::Politeness;
use crate::HarvestError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use kosh_harvester::config::Config;
/// use kosh_harvester::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page retrieval with bounded retries
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | 2xx | Return body |
/// | HTTP 5xx, 429 | Retry up to `max-retries`, politeness pause first |
/// | Timeout, connection error | Retry up to `max-retries`, politeness pause first |
/// | Other status | Fail immediately |
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    politeness: Politeness,
    max_retries: u32,
}

impl Fetcher {
    pub fn new(client: Client, politeness: Politeness, max_retries: u32) -> Self {
        Self {
            client,
            politeness,
            max_retries,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, HarvestError> {
        Ok(Self::new(
            build_http_client(config)?,
            Politeness::from_config(&config.crawler),
            config.crawler.max_retries,
        ))
    }

    /// Fetches a URL and returns its decoded body
    pub async fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    attempt += 1;
                    tracing::warn!(
                        "Fetch failed ({}), retry {}/{} for {}",
                        e,
                        attempt,
                        self.max_retries,
                        url
                    );
                    self.politeness.pause().await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, HarvestError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // The archive serves UTF-8 whatever the Content-Type charset claims
        let bytes = response.bytes().await.map_err(|e| classify_error(url, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> HarvestError {
    if error.is_timeout() {
        HarvestError::Timeout {
            url: url.to_string(),
        }
    } else {
        HarvestError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

fn is_transient(error: &HarvestError) -> bool {
    match error {
        HarvestError::Timeout { .. } => true,
        HarvestError::Http { source, .. } => source.is_connect() || source.is_request(),
        HarvestError::Status { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS.as_u16()
                || StatusCode::from_u16(*status).is_ok_and(|s| s.is_server_error())
        }
        _ => false,
    }
}
