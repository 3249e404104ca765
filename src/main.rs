use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tokio::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use event_gateway::app;
use event_gateway::config::{Args, LogFormat};
use event_gateway::error::GatewayError;
use event_gateway::state::AppState;
use event_gateway::sweeper::sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // parse cli arguments
    let args = Args::parse();
    init_tracing(args.log_format)?;

    info!("Starting event gateway");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_args(&args);

    // spawn the background sweeper
    if args.sweep_interval > 0 {
        tokio::spawn(sweeper(
            Arc::clone(&state.rate_limiter),
            Arc::clone(&state.clock),
            Duration::from_secs(args.sweep_interval),
        ));
    }

    let router = app(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(GatewayError::from)?;

    info!(%addr, environment = %args.environment, "Event gateway listening");
    info!(
        event_logging = args.is_production(),
        max_body_bytes = args.max_body_bytes,
        sweep_interval_secs = args.sweep_interval,
        "Configuration loaded"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(GatewayError::from)?;

    info!("Event gateway stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| GatewayError::Config(e.to_string()))?;
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
