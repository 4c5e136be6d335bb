use crate::config::Config;
use crate::db::{init_db, Database, RentalRepository};
use crate::responses::error_response;
use crate::router::handle;
use crate::service::RentalLookupService;
use astra::Server;
use clap::Parser;

mod api;
mod config;
mod db;
mod domain;
mod errors;
mod geo;
mod logging;
mod responses;
mod router;
mod service;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::parse();
    logging::init_logger(config.debug, config.log_format);

    tracing::info!("Starting rental service");
    tracing::debug!(?config, "Loaded configuration");

    let db = Database::new(&config.db_path);

    if let Some(schema) = &config.schema {
        if let Err(e) = init_db(&db, schema) {
            tracing::error!(error = %e, "Database initialization failed");
            std::process::exit(1);
        }
    }

    let rentals = RentalLookupService::new(
        RentalRepository::new(db).with_query_timeout(config.query_timeout()),
    );

    let addr = config.addr();
    tracing::info!(%addr, workers = config.max_workers, "Starting API server");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &rentals) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly");
}
