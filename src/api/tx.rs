use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, MessageResponse, PendingResponse};
use crate::transaction::Transaction;

/// Queue a transaction for the next mined block.
#[post("/transactions/new/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<Transaction>,
) -> impl Responder {
    let Transaction {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let index = {
        let mut bc = state.ledger.lock().expect("mutex poisoned");
        bc.new_transaction(sender, recipient, amount)
    };
    info!("POST /transactions/new/ - queued for block #{index}");

    HttpResponse::Created().json(MessageResponse {
        message: format!("Transaction will be added to Block {index}"),
    })
}

/// List the transactions waiting for the next block.
#[get("/transactions/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let bc = state.ledger.lock().expect("mutex poisoned");
    let pending = bc.pending();
    HttpResponse::Ok().json(PendingResponse {
        size: pending.len(),
        transactions: pending,
    })
}
