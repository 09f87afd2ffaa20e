/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum DefiLlamaError {
    /// Network failure or per-attempt timeout from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    ///
    /// Displays the body text, or `HTTP <status>` when the body is empty.
    #[error("{}", http_message(.status, .body))]
    Http { status: u16, body: String },
    /// Response body is not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
    /// Valid JSON with an unexpected top-level structure.
    #[error("{0}")]
    Shape(String),
    /// Client options rejected at construction.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl DefiLlamaError {
    /// Whether the request loop retries after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Http { .. } | Self::Decode(_)
        )
    }

    /// Whether this error is a per-attempt timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

fn http_message(status: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_owned()
    }
}
