//! HTTP client for the market data provider.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Configuration for the market data client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 20_000,
            user_agent: format!("candela/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while talking to the provider.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("Failed to fetch data: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with retry logic.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: Client,
    config: ClientConfig,
}

impl MarketClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `url`, returning the response body.
    ///
    /// Server errors (5xx), rate limiting (429) and transport failures are
    /// retried with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Status`] for any other non-success status or
    /// once retries are exhausted, and [`DownloadError::Http`] for transport
    /// failures.
    pub async fn get(&self, url: &str) -> Result<Bytes, DownloadError> {
        let mut attempts = 0;

        loop {
            tracing::debug!(url, attempt = attempts, "requesting");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.bytes().await?);
                    }

                    if Self::is_retryable_status(status) && attempts < self.config.max_retries {
                        attempts += 1;
                        let delay = self.calculate_backoff_delay(attempts);
                        tracing::warn!(
                            status = status.as_u16(),
                            attempt = attempts,
                            delay_ms = delay.as_millis() as u64,
                            "retrying after server response"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(DownloadError::Status {
                        status: status.as_u16(),
                    });
                }
                Err(e) if Self::is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tracing::warn!(
                        error = %e,
                        attempt = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "retrying after transport error"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter within ±25%
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            (u64::from(attempt) * 17 % (jitter_range * 2)) as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    fn is_retryable_error(error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("candela/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(MarketClient::with_defaults().is_ok());
    }

    #[test]
    fn test_backoff_delay_calculation() {
        let client = MarketClient::with_defaults().unwrap();

        // base_delay * 2 = 2000ms, jitter within ±25%
        let delay1 = client.calculate_backoff_delay(1);
        assert!(delay1.as_millis() >= 1500 && delay1.as_millis() <= 2500);

        let delay2 = client.calculate_backoff_delay(2);
        assert!(delay2.as_millis() >= 3000 && delay2.as_millis() <= 5000);

        let delay_high = client.calculate_backoff_delay(20);
        assert!(delay_high.as_millis() <= 25_000);
    }

    #[test]
    fn test_retryable_status() {
        assert!(MarketClient::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(MarketClient::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(!MarketClient::is_retryable_status(StatusCode::NOT_FOUND));
    }
}
