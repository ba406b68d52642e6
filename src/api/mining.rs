use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, error, info};
use std::time::Instant;

use super::models::{AppState, MessageResponse, MineResponse};
use crate::blockchain::{Blockchain, MINING_REWARD, REWARD_SENDER};

/// Mine a new block from the pending pool:
/// - Solve PoW against the tip's proof (off the lock, on the blocking pool)
/// - Queue the reward to this node and seal, under one lock
/// - If the tip moved while solving, solve again against the new tip
#[get("/mine/")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let t0 = Instant::now();
    let pow = state.ledger.lock().expect("mutex poisoned").pow();

    loop {
        let last_proof = state.ledger.lock().expect("mutex poisoned").last_block().proof;

        let proof = match web::block(move || pow.solve(last_proof)).await {
            Ok(proof) => proof,
            Err(err) => {
                error!("MINER - proof search aborted: {err}");
                return HttpResponse::InternalServerError().json(MessageResponse {
                    message: "proof search failed".into(),
                });
            }
        };
        debug!("MINER - found proof {proof} for last proof {last_proof}");

        let mut bc = state.ledger.lock().expect("mutex poisoned");
        let (tip_proof, previous_hash) = {
            let tip = bc.last_block();
            (tip.proof, Blockchain::hash(tip))
        };
        if !pow.is_valid_proof(tip_proof, proof) {
            debug!("MINER - tip moved while solving, retrying");
            continue;
        }

        bc.new_transaction(REWARD_SENDER, state.node_identifier.as_str(), MINING_REWARD);
        let resp = match bc.new_block(proof, Some(previous_hash)) {
            Ok(block) => MineResponse {
                message: "New Block Forged",
                index: block.index,
                transactions: block.transactions.clone(),
                timestamp: block.timestamp,
                proof: block.proof,
                previous_hash: block.previous_hash.clone(),
            },
            Err(err) => {
                error!("MINER - seal rejected: {err}");
                return HttpResponse::Conflict().json(MessageResponse {
                    message: err.to_string(),
                });
            }
        };
        drop(bc);

        info!(
            "MINER - forged block #{} (proof={}, txs={}, {} ms)",
            resp.index,
            resp.proof,
            resp.transactions.len(),
            t0.elapsed().as_millis()
        );
        return HttpResponse::Ok().json(resp);
    }
}
