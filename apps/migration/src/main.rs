//! Command-line runner for the posting schema migrations.
//!
//! Reads `DATABASE_URL` (a `.env` file is honoured), e.g.
//! `migration up` or `migration fresh`.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx::query=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::run_cli(migration::Migrator).await;
}
