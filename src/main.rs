//! Acervo Server - in-memory library inventory
//!
//! State lives only in memory and is rebuilt from the seed data on every start.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acervo_server::{api, config::AppConfig, repository::Ledger, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("acervo_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Acervo Server v{}", env!("CARGO_PKG_VERSION"));

    let ledger = if config.ledger.seed {
        Ledger::seeded().context("Failed to seed the ledger")?
    } else {
        Ledger::new()
    };
    tracing::info!(
        titles = ledger.titles_list().len(),
        copies = ledger.copies_list().len(),
        users = ledger.users_list().len(),
        "Ledger initialized"
    );

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState::new(config, ledger);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
