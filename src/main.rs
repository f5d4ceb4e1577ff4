use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use crate::store::MockStore;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod auth;
mod config;
mod data;
mod db;
mod domain;
mod errors;
mod forms;
mod remote;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() {
    let config = AppConfig::from_env();
    init_tracing(config.log_json);

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let store = Arc::new(MockStore::seeded());
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = match AppState::build(config, store) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "could not set up data backend");
            std::process::exit(1);
        }
    };

    info!(%addr, workers, "starting server");
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
