use std::fmt;
use std::time::Duration;

use reqwest::header;
use serde_json::Value;
use tokio::time::sleep;

use crate::{ClientOptions, DefiLlamaError, Protocol, Result, RetryPolicy};

/// Path of the protocol listing endpoint, relative to the base URL.
pub const PROTOCOLS_PATH: &str = "/protocols";

const PROTOCOLS_SHAPE_ERROR: &str = "DefiLlama /protocols: expected an array response";

#[derive(Clone)]
/// HTTP client for the DefiLlama REST API.
pub struct DefiLlamaClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl fmt::Debug for DefiLlamaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefiLlamaClient")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.options.timeout_ms)
            .field("retries", &self.options.retries)
            .finish()
    }
}

impl Default for DefiLlamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DefiLlamaClient {
    /// Creates a client for the public API with default timeout and retries.
    pub fn new() -> Self {
        Self::from_valid_options(ClientOptions::default())
    }

    /// Creates a client from explicit options.
    ///
    /// Returns [`DefiLlamaError::InvalidOptions`] for a zero timeout or an
    /// empty base URL.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use defillama_http::{ClientOptions, DefiLlamaClient};
    ///
    /// let client = DefiLlamaClient::with_options(
    ///     ClientOptions::default().with_timeout_ms(5_000).with_retries(1),
    /// )
    /// .expect("options are valid");
    /// ```
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(mut options: ClientOptions) -> Self {
        let base_url = normalize_base_url(&options.base_url);
        options.base_url.clone_from(&base_url);
        Self {
            http: reqwest::Client::new(),
            base_url,
            options,
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Options in effect, with the normalized base URL.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetches the full protocol listing.
    ///
    /// Records are returned in upstream order without any field validation.
    pub async fn fetch_protocols(&self) -> Result<Vec<Protocol>> {
        let items = self.fetch_protocols_raw().await?;
        Ok(items.into_iter().map(Protocol::from).collect())
    }

    /// Fetches the protocol listing as untyped JSON values.
    ///
    /// A body that parses but is not a JSON array fails with
    /// [`DefiLlamaError::Shape`] and is not retried.
    pub async fn fetch_protocols_raw(&self) -> Result<Vec<Value>> {
        match self.get_json_with_retry(PROTOCOLS_PATH).await? {
            Value::Array(items) => Ok(items),
            _ => Err(DefiLlamaError::Shape(PROTOCOLS_SHAPE_ERROR.to_owned())),
        }
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json_with_retry(&self, path: &str) -> Result<Value> {
        let url = self.endpoint_url(path);
        let policy = RetryPolicy::from(&self.options);
        let mut attempt = 0usize;
        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                url = %url,
                attempt = attempt + 1,
                max_attempts = policy.max_attempts(),
                "sending request"
            );

            match self.get_json_once(&url).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && policy.has_next(attempt) => {
                    self.wait_before_retry(&policy, attempt, &err).await;
                    attempt += 1;
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(url = %url, attempts = attempt + 1, error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }

    /// Runs one attempt. The reqwest timeout spans connect through the end
    /// of the body, and dropping the future cancels the request.
    async fn get_json_once(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
            .map_err(DefiLlamaError::Transport)?;

        let status = response.status();
        let body = response.text().await;

        if !status.is_success() {
            return Err(DefiLlamaError::Http {
                status: status.as_u16(),
                body: body.unwrap_or_default(),
            });
        }

        let body = body.map_err(DefiLlamaError::Transport)?;
        serde_json::from_str(&body)
            .map_err(|err| DefiLlamaError::Decode(format!("invalid JSON response: {err}")))
    }

    /// Sleeps `200ms × (attempt + 1)` before the next attempt.
    async fn wait_before_retry(&self, policy: &RetryPolicy, attempt: usize, err: &DefiLlamaError) {
        let delay = policy.delay_after(attempt);

        #[cfg(feature = "tracing")]
        tracing::warn!(
            base_url = %self.base_url,
            attempt = attempt + 1,
            delay_ms = policy.delay_after_ms(attempt),
            error = %err,
            "request attempt failed, retrying"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = err;

        sleep(delay).await;
    }
}

/// Trims surrounding whitespace and every trailing slash.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}
