use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use card_compare::config::Config;
use card_compare::{build_state, handlers};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; level comes from RUST_LOG (default info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    let state = build_state(&config).context("failed to build application state")?;

    let bind: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind '{}' (expected host:port)", config.server.bind))?;

    let router = handlers::router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(
        %bind,
        name = %config.server.name,
        simulate_latency = config.catalog.simulate_latency,
        model = %config.openai.model,
        "Starting card-compare HTTP server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
