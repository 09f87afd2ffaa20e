//! Open record for entries of the `/protocols` listing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One protocol entry as returned by the upstream API.
///
/// The record keeps the received JSON value untouched, so fields that are
/// not covered by an accessor are still reachable through [`Protocol::get`]
/// and survive re-serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(Value);

impl Protocol {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns the raw field value, if the record is an object holding it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns a string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }

    /// Returns a numeric field as `f64`.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field)?.as_f64()
    }

    /// Returns an integral numeric field.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field)?.as_i64()
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn address(&self) -> Option<&str> {
        self.get_str("address")
    }

    pub fn symbol(&self) -> Option<&str> {
        self.get_str("symbol")
    }

    pub fn url(&self) -> Option<&str> {
        self.get_str("url")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    /// Primary chain, e.g. `"Ethereum"` or `"Multi-Chain"`.
    pub fn chain(&self) -> Option<&str> {
        self.get_str("chain")
    }

    pub fn logo(&self) -> Option<&str> {
        self.get_str("logo")
    }

    pub fn category(&self) -> Option<&str> {
        self.get_str("category")
    }

    /// Chains the protocol is deployed on. Non-string entries are skipped.
    pub fn chains(&self) -> Option<Vec<&str>> {
        let chains = self.get("chains")?.as_array()?;
        Some(chains.iter().filter_map(Value::as_str).collect())
    }

    /// Adapter module file name.
    pub fn module(&self) -> Option<&str> {
        self.get_str("module")
    }

    pub fn twitter(&self) -> Option<&str> {
        self.get_str("twitter")
    }

    /// Listing time as Unix seconds.
    pub fn listed_at(&self) -> Option<i64> {
        self.get_i64("listedAt")
    }

    pub fn slug(&self) -> Option<&str> {
        self.get_str("slug")
    }

    /// Total value locked in USD.
    pub fn tvl(&self) -> Option<f64> {
        self.get_f64("tvl")
    }

    /// Per-chain TVL map, keyed by chain name.
    pub fn chain_tvls(&self) -> Option<&Map<String, Value>> {
        self.get("chainTvls")?.as_object()
    }

    /// TVL on a single chain.
    pub fn chain_tvl(&self, chain: &str) -> Option<f64> {
        self.chain_tvls()?.get(chain)?.as_f64()
    }

    /// Percentage TVL change over the last hour.
    pub fn change_1h(&self) -> Option<f64> {
        self.get_f64("change_1h")
    }

    /// Percentage TVL change over the last day.
    pub fn change_1d(&self) -> Option<f64> {
        self.get_f64("change_1d")
    }

    /// Percentage TVL change over the last week.
    pub fn change_7d(&self) -> Option<f64> {
        self.get_f64("change_7d")
    }
}

impl From<Value> for Protocol {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Protocol> for Value {
    fn from(protocol: Protocol) -> Self {
        protocol.0
    }
}
