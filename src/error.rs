use thiserror::Error;

/// Failures surfaced by the ledger engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("invalid proof {proof} for last proof {last_proof}")]
    InvalidProof { last_proof: u64, proof: u64 },
}

/// Failures while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid number: {source}")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("POW_DIFFICULTY must be within {min}..={max}, got {got}")]
    DifficultyOutOfRange { got: u32, min: u32, max: u32 },
}
