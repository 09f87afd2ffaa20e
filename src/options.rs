use crate::{DefiLlamaError, Result};

/// Public DefiLlama API host.
pub const DEFAULT_BASE_URL: &str = "https://api.llama.fi";

/// Configures the upstream host, HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// API base URL. Trailing slashes are stripped by the client.
    pub base_url: String,
    /// Per-attempt timeout in milliseconds. Must be greater than zero.
    pub timeout_ms: u64,
    /// Number of retries after the initial attempt.
    pub retries: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 15_000,
            retries: 2,
        }
    }
}

impl ClientOptions {
    /// Overrides the API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-attempt timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the number of retries after the first attempt.
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Rejects a zero timeout or a blank base URL.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(DefiLlamaError::InvalidOptions(
                "timeout_ms must be greater than zero".to_owned(),
            ));
        }
        if self.base_url.trim().trim_end_matches('/').is_empty() {
            return Err(DefiLlamaError::InvalidOptions(
                "base_url cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
