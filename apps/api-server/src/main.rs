//! # Buffer API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod serializers;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let db = buffer_infra::database::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("Migrations applied");
    }

    let state = AppState::new(db);

    tracing::info!(
        "Starting Buffer API Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
