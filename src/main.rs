//! Pokedex Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use pokedex_api::{AppState, build_router};
use pokedex_core::config::AppConfig;
use pokedex_core::error::AppError;
use pokedex_database::connect_store;
use pokedex_service::{PokemonService, ReqwestHttpAdapter, SeedService};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default`, the `POKEDEX_ENV` overlay, and environment overrides.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("POKEDEX_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %config.store.provider,
        "Starting Pokedex server"
    );

    let store = connect_store(&config.store, &config.database).await?;

    let pokemon_service = PokemonService::new(store, config.catalog.default_limit);
    let http = Arc::new(ReqwestHttpAdapter::new(&config.seed)?);
    let seed_service = SeedService::new(pokemon_service.clone(), http, config.seed.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_router(AppState::new(config, pokemon_service, seed_service));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Pokedex server listening");

    let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections");
        let _ = signal_tx.send(());
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server => return server_result(result),
        _ = signal_rx => {}
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => server_result(result)?,
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed, dropping open connections"
            );
            server.abort();
        }
    }

    tracing::info!("Pokedex server shut down");
    Ok(())
}

fn server_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::internal(format!("Server error: {e}"))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
