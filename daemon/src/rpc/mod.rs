// HTTP Service
// JSON endpoints over a shared ParcelRegistry.
//
// Module Structure:
// - types: request and response bodies
// - handlers: one handler per route

pub mod handlers;
pub mod types;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use landchain_common::{config, registry::ParcelRegistry};
use log::{info, warn};

use crate::config::Config;
use handlers::*;

/// Register every route on an app or test service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .route("/health", web::get().to(handle_health))
        .route("/parcel/register", web::post().to(handle_register))
        .route("/parcel/certify", web::post().to(handle_certify))
        .route("/parcel/verify", web::post().to(handle_verify))
        .route("/parcel/transfer", web::post().to(handle_transfer))
        .route("/parcel/report", web::get().to(handle_report))
        .route("/parcel/hello", web::post().to(handle_hello))
        .route("/state/export", web::get().to(handle_state_export))
        .route("/state/load", web::post().to(handle_state_load))
        .route("/state/reset", web::post().to(handle_state_reset))
        .route("/state/global", web::get().to(handle_state_global))
        .route("/abi/call", web::post().to(handle_abi_call))
        .route("/abi/group", web::post().to(handle_abi_group));
}

/// Serve the registry until the server stops
pub async fn run(config: &Config, registry: ParcelRegistry) -> anyhow::Result<()> {
    if !config.is_loopback_bind() && log::log_enabled!(log::Level::Warn) {
        warn!(
            "HTTP service bound to {}, state endpoints are reachable without authentication",
            config.rpc_bind_address
        );
    }
    if log::log_enabled!(log::Level::Info) {
        info!("Starting HTTP service on {}", config.rpc_bind_address);
    }

    let data = web::Data::new(registry);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(&config.rpc_bind_address)
        .with_context(|| format!("Failed to bind {}", config.rpc_bind_address))?
        .workers(config.rpc_threads)
        .run()
        .await
        .context("HTTP service failed")
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body(format!(
        "Hello, world!\n{} running on: {}",
        config::CONTRACT_NAME,
        config::VERSION
    ))
}
