use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindwell::auth::RemoteIdentityClient;
use mindwell::config::AppConfig;
use mindwell::database::{self, PgStore};
use mindwell::{app, AppState};

#[derive(Parser)]
#[command(name = "mindwell")]
#[command(about = "Mindwell web server")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Bind address (overrides HOST)")]
    host: Option<String>,

    #[arg(long, short, help = "Listen port (overrides PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Read environment from this file instead of .env")]
    env_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env if present so cargo run picks up DATABASE_URL, IDENTITY_URL, etc.
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path).with_context(|| format!("failed to load {}", path.display()))?;
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let mut config = AppConfig::from_env();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    tracing::info!("Starting Mindwell in {:?} mode", config.environment);

    let identity = RemoteIdentityClient::new(&config.identity).context("identity client")?;
    let pool = database::connect(&config.database).context("database pool")?;
    let state = AppState::new(config.clone(), Arc::new(identity), Arc::new(PgStore::new(pool)));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Mindwell listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
