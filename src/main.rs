//! Employee API - HTTP facade over the upstream employee service
//!
//! This is the composition root that wires together all the components.

use employee_api::infrastructure::{shutdown_signal, ShutdownController};
use employee_api::{load_config, ApiServer, EmployeeService, HttpEmployeeDirectory};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting employee API listen={} upstream={}",
        cfg.listen_addr,
        cfg.upstream_url
    );

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapter
    let directory = Arc::new(HttpEmployeeDirectory::new(cfg.upstream())?);

    // 2. Application service
    let service = Arc::new(EmployeeService::new(directory));

    // 3. Inbound adapter, stopped by SIGINT/SIGTERM
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let server = ApiServer::new(cfg.listen_addr, service);
    server.run(shutdown.wait()).await
}
