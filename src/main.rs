use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::db::setup_database;
use crate::logger::init_logger;
use crate::services::tracking_service::TrackingService;
use crate::services::tracking_store::SqliteTrackingStore;

mod app;
mod config;
mod db;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    let config = AppConfig::from_env()?;
    init_logger(config.default_log_level());

    // Conectarnos a la DB
    let db_pool = setup_database(&config.database_url, config.db_max_connections).await?;

    let store = SqliteTrackingStore::new(db_pool.clone());
    store
        .run_migrations()
        .await
        .context("Fallo en migraciones de 'tracking'")?;

    let tracking_service = TrackingService::new(Arc::new(store));

    log::info!(
        "Levantando servidor en modo {} en {}:{}",
        config.environment,
        config.host,
        config.port
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(tracking_service.clone()))
            .configure(app::init_app)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("No se pudo abrir {}:{}", config.host, config.port))?
    .run()
    .await?;

    db_pool.close().await;
    Ok(())
}
