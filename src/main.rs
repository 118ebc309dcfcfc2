//! Payroll engine API server.
//!
//! Usage:
//!   cargo run --bin payroll-engine
//!
//! Environment:
//!   PAYROLL_CONFIG_DIR - Directory holding payroll.yaml (default: ./config/default)
//!   RUST_LOG           - Log filter (default: info)

use std::error::Error;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config_dir =
        std::env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let addr = config.settings().server.bind_address();

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&addr).await?;

    info!("Payroll engine listening on http://{}", addr);
    info!("  POST /payroll/compute     - Period pay breakdown");
    info!("  POST /payroll/aggregate   - Totals across results");
    info!("  POST /payroll/run         - Pay every employee on a cycle");
    info!("  POST /payroll/monthly     - 30-day base salary projection");
    info!("  POST /reports/dashboard   - Dashboard statistics");
    info!("  POST /reports/workforce   - Workforce breakdown");
    info!("  POST /authorize           - Navigation decision");
    info!("  GET  /roles/:role/pages   - Pages visible to a role");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;

    Ok(())
}
