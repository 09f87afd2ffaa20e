//! `defillama-http` is an async HTTP client for the DefiLlama REST API.
//!
//! The crate wraps the `/protocols` endpoint:
//! - [`DefiLlamaClient::fetch_protocols`]
//! - [`DefiLlamaClient::fetch_protocols_raw`]
//!
//! Every call is bounded by a per-attempt timeout and retried with linear
//! backoff, see [`ClientOptions`].

mod client;
mod error;
mod options;
mod protocol;
mod retry;

pub use client::{DefiLlamaClient, PROTOCOLS_PATH};
pub use error::DefiLlamaError;
pub use options::{ClientOptions, DEFAULT_BASE_URL};
pub use protocol::Protocol;
pub use retry::RetryPolicy;

pub type Result<T> = std::result::Result<T, DefiLlamaError>;
