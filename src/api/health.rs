use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, HealthResponse};

/// Liveness plus a cheap view of the ledger: tip index and pending pool size.
#[get("/health/")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let bc = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        tip_index: bc.last_block().index,
        pending: bc.pending().len(),
    })
}
