use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use linter_bus::config::ServiceConfig;
use linter_bus::rules::{AgencyRules, LInterRules};
use linter_bus::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let rules = LInterRules::default();
    info!(
        agency = %rules.metadata().name,
        color = %rules.metadata().color,
        "Loaded agency rules"
    );

    let app = create_router(AppState::new(rules));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "L'Inter rules service listening");
    info!("  GET  /health                 - Health check");
    info!("  GET  /agency                 - Agency metadata");
    info!("  GET  /routes/:route/id        - Route ID from short name");
    info!("  POST /routes/short-name      - Route short name");
    info!("  GET  /routes/:route/long-name - Long name merge decision");
    info!("  POST /stops/id               - Stop ID");
    info!("  POST /labels/headsign        - Clean trip headsign");
    info!("  POST /labels/stop-name       - Clean stop name");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
