//! GitHub Dashboard - one page of language, activity and repository stats
//!
//! # Usage
//! ```bash
//! GITHUB_ACCESS_TOKEN=... GITHUB_USERNAME=octocat github-dashboard
//! github-dashboard --username octocat --token ghp_... --port 8080
//! ```

mod config;
mod error;
mod github;
mod models;
mod routes;
mod stats;

use std::sync::Arc;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Cli, Config};
use github::HttpClient;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = std::env::current_dir().ok().and_then(|dir| config::load_env_file(&dir));
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = &env_file {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = Arc::new(Config::from_cli(&cli));
    if config.access_token.is_empty() {
        tracing::warn!("no access token configured, upstream requests will likely be rejected");
    }
    if config.account.is_empty() {
        tracing::warn!("no account configured, upstream requests will fail");
    }

    let api = HttpClient::new(&config)?;

    let app = routes::create_router(AppState::new(config.clone(), api)).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!(account = %config.account, api = %config.api_base_url, "serving dashboard on http://{}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
        }
        tracing::info!("shutting down");
    };

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    Ok(())
}
