use log::{debug, info};

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, ProofOfWork};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// In-memory, append-only chain plus the pool of transactions waiting for the next block.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
    pow: ProofOfWork,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn with_pow(pow: ProofOfWork) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            pending: Vec::new(),
            pow,
        };
        bc.push_block(GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        bc
    }

    /// Queue a transaction for the next block.
    /// Returns the index of the block it is expected to land in.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u64,
    ) -> u64 {
        let tx = Transaction::new(sender, recipient, amount);
        debug!(
            "LEDGER - queued tx {} -> {} ({}); pending={}",
            tx.sender,
            tx.recipient,
            tx.amount,
            self.pending.len() + 1
        );
        self.pending.push(tx);
        self.last_block().index + 1
    }

    /// Seal the pending pool into a new block with `proof`.
    /// `previous_hash` defaults to the digest of the current tip.
    /// Rejects proofs that do not satisfy the puzzle against the tip's proof.
    pub fn new_block(
        &mut self,
        proof: u64,
        previous_hash: Option<String>,
    ) -> Result<&Block, LedgerError> {
        let last = self.last_block();
        let last_proof = last.proof;
        if !self.pow.is_valid_proof(last_proof, proof) {
            return Err(LedgerError::InvalidProof { last_proof, proof });
        }
        let previous_hash = previous_hash.unwrap_or_else(|| last.hash());
        Ok(self.push_block(proof, previous_hash))
    }

    fn push_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let index = self.chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending);
        let block = Block::new(index, transactions, proof, previous_hash);
        info!(
            "LEDGER - sealed block #{} (proof={}, txs={})",
            block.index,
            block.proof,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    /// Digest of a block (see `Block::hash`).
    pub fn hash(block: &Block) -> String {
        block.hash()
    }

    /// Validate the entire chain: genesis, indices, linkage and PoW.
    pub fn is_valid_chain(&self) -> bool {
        let Some(genesis) = self.chain.first() else {
            return false;
        };
        if genesis.index != 1 || genesis.previous_hash != GENESIS_PREVIOUS_HASH {
            return false;
        }

        self.chain.windows(2).all(|pair| {
            let (prev, current) = (&pair[0], &pair[1]);
            current.index == prev.index + 1
                && current.previous_hash == prev.hash()
                && self.pow.is_valid_proof(prev.proof, current.proof)
        })
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn pow(&self) -> ProofOfWork {
        self.pow
    }

    pub fn difficulty(&self) -> u32 {
        self.pow.difficulty()
    }
}

#[cfg(test)]
mod tests {
    use super::Blockchain;
    use crate::blockchain::{GENESIS_PREVIOUS_HASH, ProofOfWork};
    use crate::error::LedgerError;
    use crate::transaction::Transaction;

    fn mine(bc: &mut Blockchain) -> u64 {
        let proof = bc.pow().solve(bc.last_block().proof);
        bc.new_block(proof, None).expect("valid proof").index
    }

    #[test]
    fn genesis_block_is_sealed_on_construction() {
        let bc = Blockchain::with_pow(ProofOfWork::default());
        assert_eq!(bc.len(), 1);
        let genesis = bc.last_block();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, 1);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
        assert!(bc.pending().is_empty());
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn new_transaction_targets_next_block() {
        let mut bc = Blockchain::with_pow(ProofOfWork::default());
        assert_eq!(bc.new_transaction("a", "b", 5), 2);
        assert_eq!(bc.new_transaction("b", "c", 1), 2);
        assert_eq!(bc.pending().len(), 2);
        mine(&mut bc);
        assert_eq!(bc.new_transaction("c", "d", 0), 3);
    }

    #[test]
    fn sealing_moves_pending_in_order() {
        let mut bc = Blockchain::with_pow(ProofOfWork::default());
        bc.new_transaction("a", "b", 5);
        bc.new_transaction("b", "c", 2);
        mine(&mut bc);

        let block = bc.last_block();
        assert_eq!(
            block.transactions,
            vec![Transaction::new("a", "b", 5), Transaction::new("b", "c", 2)]
        );
        assert!(bc.pending().is_empty());
    }

    #[test]
    fn first_mined_block_links_to_genesis() {
        let mut bc = Blockchain::with_pow(ProofOfWork::default());
        bc.new_transaction("a", "b", 5);
        let genesis_hash = Blockchain::hash(bc.last_block());
        let proof = ProofOfWork::default().solve(1);
        assert!(ProofOfWork::guess_hash(1, proof).starts_with("0000"));

        let block = bc.new_block(proof, None).expect("valid proof");
        assert_eq!(block.index, 2);
        assert_eq!(block.proof, proof);
        assert_eq!(block.previous_hash, genesis_hash);
        assert_eq!(block.transactions, vec![Transaction::new("a", "b", 5)]);
    }

    #[test]
    fn explicit_previous_hash_is_kept() {
        let mut bc = Blockchain::with_pow(ProofOfWork::new(1));
        let proof = bc.pow().solve(1);
        let block = bc.new_block(proof, Some("custom".into())).expect("valid proof");
        assert_eq!(block.previous_hash, "custom");
        assert!(!bc.is_valid_chain());
    }

    #[test]
    fn chain_links_and_indices_hold() {
        let mut bc = Blockchain::with_pow(ProofOfWork::new(2));
        for i in 0..5u64 {
            bc.new_transaction("s", "r", i);
            mine(&mut bc);
        }
        assert_eq!(bc.len(), 6);
        for (i, block) in bc.chain().iter().enumerate() {
            assert_eq!(block.index, i as u64 + 1);
        }
        for pair in bc.chain().windows(2) {
            assert_eq!(pair[1].previous_hash, pair[0].hash());
        }
        assert!(bc.is_valid_chain());
    }

    #[test]
    fn invalid_proof_is_rejected_and_pool_kept() {
        let mut bc = Blockchain::with_pow(ProofOfWork::default());
        bc.new_transaction("a", "b", 5);
        let pow = bc.pow();
        let bad = (0..).find(|p| !pow.is_valid_proof(1, *p)).unwrap();

        let err = bc.new_block(bad, None).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidProof {
                last_proof: 1,
                proof: bad
            }
        );
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.pending().len(), 1);
    }

    #[test]
    fn empty_block_can_be_sealed() {
        let mut bc = Blockchain::with_pow(ProofOfWork::new(1));
        mine(&mut bc);
        assert!(bc.last_block().transactions.is_empty());
        assert_eq!(bc.len(), 2);
    }

    #[test]
    fn tampering_breaks_validation() {
        let mut bc = Blockchain::with_pow(ProofOfWork::new(2));
        bc.new_transaction("a", "b", 5);
        mine(&mut bc);
        mine(&mut bc);
        assert!(bc.is_valid_chain());

        bc.chain[1].transactions[0].amount = 500;
        assert!(!bc.is_valid_chain());
    }
}
