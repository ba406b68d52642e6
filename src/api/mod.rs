mod chain;
mod health;
mod mining;
pub mod models;
mod tx;

use actix_web::web::{self, ServiceConfig};
use actix_web::{HttpResponse, error};
use log::warn;

pub use models::AppState;
use models::MessageResponse;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::health_check)
        .service(chain::get_chain)
        .service(chain::validate_chain)
        .service(mining::mine)
        .service(tx::post_transaction)
        .service(tx::get_pending);
}

/// Malformed bodies (missing fields, wrong types, negative amounts) become 400s with a JSON message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("{} {} - rejected body: {}", req.method(), req.path(), err);
        let resp = HttpResponse::BadRequest().json(MessageResponse {
            message: err.to_string(),
        });
        error::InternalError::from_response(err, resp).into()
    })
}
