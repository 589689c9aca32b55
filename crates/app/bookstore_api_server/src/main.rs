//! Bookstore API server binary.

use std::path::PathBuf;

use bookstore_api::AppState;
use bookstore_api::config::{ApiConfig, bind_addr};
use bookstore_core::auth::password::DEFAULT_BCRYPT_COST;
use clap::Parser;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "bookstore_api_server", about = "Bookstore API server", version)]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// bcrypt cost factor for new password hashes.
    #[arg(long, env = "BCRYPT_COST", default_value_t = DEFAULT_BCRYPT_COST)]
    bcrypt_cost: u32,

    /// JSON file with the initial catalog (array of books).
    #[arg(long, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bookstore_api=debug,bookstore_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: bind_addr(Some(&args.host), Some(&args.port.to_string())),
        bcrypt_cost: args.bcrypt_cost,
        catalog_path: args.catalog,
        ..ApiConfig::from_env()
    };

    info!(
        bind_addr = %config.bind_addr,
        bcrypt_cost = config.bcrypt_cost,
        catalog = ?config.catalog_path,
        "starting bookstore_api_server"
    );

    let state = AppState::from_config(&config)?;
    let app = bookstore_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "Server running on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
    }
    info!("shutdown signal received");
}
