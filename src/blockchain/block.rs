use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A sealed block: a batch of transactions anchored to its predecessor's digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // Unix seconds (UTC), microsecond precision
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Build a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: now_secs(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// Key-sorted, whitespace-free JSON used as the digest preimage.
    /// The timestamp is pinned to fixed-point with 6 decimals so every
    /// implementation renders identical bytes.
    pub fn canonical_json(&self) -> String {
        let txs = self
            .transactions
            .iter()
            .map(Transaction::canonical_json)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{{\"index\":{},\"previous_hash\":{},\"proof\":{},\"timestamp\":{:.6},\"transactions\":[{}]}}",
            self.index,
            Value::from(self.previous_hash.as_str()),
            self.proof,
            self.timestamp,
            txs
        )
    }

    /// Lowercase hex SHA-256 of `canonical_json()`.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json().as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn now_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
