//! Payroll Engine HTTP server entry point.

use std::env;
use std::sync::Arc;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::store::{InMemoryStore, PayrollStore};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir).map_err(|e| {
        tracing::error!(error = %e, config_dir = %config_dir, "Failed to load configuration");
        e
    })?;

    let store: Arc<dyn PayrollStore> = match env::var("PAYROLL_SEED_FILE") {
        Ok(path) => Arc::new(InMemoryStore::from_seed_file(&path)?),
        Err(_) => Arc::new(InMemoryStore::default()),
    };

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        company = %config.company().company_name,
        company_short_code = %config.company().company_short_code,
        total_working_days = config.payrun_settings().total_working_days,
        bind_addr = %bind_addr,
        "Starting payroll-engine"
    );

    let router = create_router(AppState::new(config, store));
    let listener = TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
