mod api;
mod blockchain;
mod config;
mod error;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use blockchain::{Blockchain, ProofOfWork};
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let ledger = Blockchain::with_pow(ProofOfWork::new(config.difficulty));
    info!(
        "⛓️ Starting ledger at http://{}:{} (difficulty={}, node={})",
        config.host,
        config.port,
        ledger.difficulty(),
        config.node_identifier
    );

    let state = web::Data::new(AppState::new(ledger, config.node_identifier.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
