use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;

use crate::config::server_config::ServerConfig;
use crate::logger::init_logger;
use crate::services::business_service::BusinessService;
use crate::services::campaign_service::CampaignService;
use crate::services::contact_service::ContactService;
use crate::services::dispatch_service::DispatchService;
use crate::services::store::EntityStore;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let server_config = ServerConfig::from_env().context("Invalid server configuration")?;

    // One store for the whole process; every worker shares it.
    let store = EntityStore::new();
    let business_service = BusinessService::new(store.clone());
    let contact_service = ContactService::new(store.clone());
    let campaign_service = CampaignService::new(store.clone());
    let dispatch_service = DispatchService::new(store);

    log::info!(
        "Starting server on {}:{} with {} worker(s)",
        server_config.host,
        server_config.port,
        server_config.workers
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(business_service.clone()))
            .app_data(web::Data::new(contact_service.clone()))
            .app_data(web::Data::new(campaign_service.clone()))
            .app_data(web::Data::new(dispatch_service.clone()))
            .configure(app::init_app)
    })
    .workers(server_config.workers)
    .bind((server_config.host.as_str(), server_config.port))
    .with_context(|| {
        format!(
            "Could not bind {}:{}",
            server_config.host, server_config.port
        )
    })?
    .run()
    .await
    .context("HTTP server stopped with an error")?;

    Ok(())
}
