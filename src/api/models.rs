use crate::blockchain::{Block, Blockchain};
use crate::transaction::Transaction;
use serde::Serialize;
use std::sync::Mutex;

/// Shared application state: the node's ledger and the identity credited for mining.
pub struct AppState {
    pub ledger: Mutex<Blockchain>,
    pub node_identifier: String,
}

impl AppState {
    pub fn new(ledger: Blockchain, node_identifier: impl Into<String>) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            node_identifier: node_identifier.into(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub tip_index: u64,
    pub pending: usize,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub timestamp: f64,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub size: usize,
    pub transactions: &'a [Transaction],
}
