//! Status service entry point.

use std::process::ExitCode;

use status_service::{Config, ServiceError, StatusService};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down gracefully");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down gracefully");
        }
    }
}

async fn run(config: Config) -> Result<(), ServiceError> {
    let running = StatusService::new(config).start().await?;
    shutdown_signal().await;
    running.stop().await
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Resolve configuration once
    let config = Config::from_env();

    // 2. Initialize tracing
    let default_filter = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&default_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // 3. Serve until signalled
    match run(config).await {
        Ok(()) => {
            tracing::info!("server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "status service failed");
            ExitCode::FAILURE
        }
    }
}
