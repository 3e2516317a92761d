//! Transaction API - main entry point

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transaction_api::config::{AppConfig, PortSource, PORT_ENV_VAR};
use transaction_api::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,transaction_api=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Transaction API failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    match config.port_source {
        PortSource::Default => {
            tracing::info!("{} not set, using default: {}", PORT_ENV_VAR, config.port)
        }
        PortSource::Env => tracing::info!("{}: {}", PORT_ENV_VAR, config.port),
    }

    let addr = config.bind_addr();
    tracing::info!("Transaction API starting on port {}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    transaction_api::serve(listener, config, shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Transaction API stopped");
    Ok(())
}
