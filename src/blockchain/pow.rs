use sha2::{Digest, Sha256};

use super::DEFAULT_DIFFICULTY;

/// Stateless proof-of-work puzzle binding a block's proof to its predecessor's:
/// find `p` such that `sha256("{last_proof}{p}")` starts with `difficulty` hex zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: u32,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

impl ProofOfWork {
    pub fn new(difficulty: u32) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Hex SHA-256 of the decimal concatenation `"{last_proof}{proof}"`.
    pub fn guess_hash(last_proof: u64, proof: u64) -> String {
        let guess = format!("{last_proof}{proof}");
        let mut hasher = Sha256::new();
        hasher.update(guess.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Does `guess_hash(last_proof, proof)` carry the required leading zeros?
    pub fn is_valid_proof(&self, last_proof: u64, proof: u64) -> bool {
        Self::guess_hash(last_proof, proof)
            .chars()
            .take(self.difficulty as usize)
            .all(|c| c == '0')
    }

    /// Smallest non-negative proof satisfying `is_valid_proof` against `last_proof`.
    /// Linear search from 0; unbounded, like any PoW puzzle.
    pub fn solve(&self, last_proof: u64) -> u64 {
        let mut proof = 0u64;
        while !self.is_valid_proof(last_proof, proof) {
            proof = proof.wrapping_add(1);
        }
        proof
    }
}
