use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use solo_suite::http::AppState;
use solo_suite::{config, db, http};

#[derive(Debug, Parser)]
#[command(name = "solo_suite", about = "Backend API for the Solo Suite business tool")]
struct Args {
    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = config::init()?;

    // Initialize database connection and run migrations
    let db = db::init(&config).await?;
    tracing::info!("database connection established");

    let state = Arc::new(AppState {
        db,
        auth_secret: config.auth_secret.clone(),
    });
    let app = http::router(state.clone(), &config);

    let port = args.port.unwrap_or(config.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Solo Suite API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the pool before exiting
    state.db.close().await;
    tracing::info!("shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
