//! Claims map embedded in a token.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Claim key for the injected issued-at timestamp (epoch seconds).
pub const ISSUED_AT: &str = "iat";

/// Claim key for the injected expiry timestamp (epoch seconds).
pub const EXPIRES_AT: &str = "exp";

/// Caller-defined key/value data carried inside a token.
///
/// Backed by an ordered map so that serialization is canonical: the
/// signature covers the encoded bytes, not the logical structure, so the
/// same claim set must always encode to byte-identical output.
///
/// The keys [`ISSUED_AT`] and [`EXPIRES_AT`] are reserved: the service
/// overwrites them at issuance with the actual timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(BTreeMap<String, Value>);

impl Claims {
    /// Create an empty claims map.
    #[must_use]
    pub fn new() -> Self {
        Claims(BTreeMap::new())
    }

    /// Add a claim, replacing any previous value under the same key.
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a claim in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a claim by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of claims, including any injected timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the map carries no claims at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over claims in canonical (key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The injected issued-at timestamp, if present as an integer.
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.0.get(ISSUED_AT).and_then(Value::as_i64)
    }

    /// The injected expiry timestamp, if present as an integer.
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get(EXPIRES_AT).and_then(Value::as_i64)
    }
}

impl From<BTreeMap<String, Value>> for Claims {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Claims(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Claims(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
