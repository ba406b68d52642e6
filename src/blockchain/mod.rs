pub mod block;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::Blockchain;
pub use pow::ProofOfWork;

/// Default Proof-of-Work difficulty (number of leading zero hex digits).
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Difficulty bounds accepted from configuration.
pub const DIFF_MIN: u32 = 1;
pub const DIFF_MAX: u32 = 16;

/// `previous_hash` sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Proof sealed into the genesis block.
pub const GENESIS_PROOF: u64 = 1;

/// Sender used for mining rewards ("0" means newly minted coin).
pub const REWARD_SENDER: &str = "0";

/// Amount credited to the node that mined a block.
pub const MINING_REWARD: u64 = 1;
