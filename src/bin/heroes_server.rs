//! Heroes HTTP server entry point
//!
//! Loads configuration and the catalogue, then serves the REST API.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heroes_api::cli::Cli;
use heroes_api::core::config::Config;
use heroes_api::core::services::Services;
use heroes_api::http;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "heroes_api=info,heroes_server=info,tower_http=debug".into());

    let json = std::env::var("HEROES_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging();

    tracing::info!("Starting heroes API");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration: flags > env > file > defaults
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    // Log configuration details
    config.log_config();

    // Catalogue is loaded once and never mutated
    let services = Arc::new(Services::from_config(config.clone())?);

    let app = http::router(services)?;

    // Bind to address and start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
