//! docchat server binary
//!
//! Run with: cargo run -p docchat --bin docchat-server

use docchat::{config::AppConfig, server::DocchatServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is honored before the environment is read.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docchat=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Completion model: {}", config.llm.model);
    tracing::info!("  - Context file: {}", config.store.context_file.display());
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);

    let server = DocchatServer::new(config)?;

    tracing::info!("Endpoints:");
    tracing::info!("  POST /api/upload - Upload a document");
    tracing::info!("  POST /api/chat   - Ask a question");
    tracing::info!("  GET  /api/ping   - Health check");

    server.start().await?;

    Ok(())
}
