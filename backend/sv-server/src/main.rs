use sv_config::Config;
use sv_db::TenantConnectionManager;
use sv_server::{AppState, build_router, cors_layer, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // SV_* overrides may come from a .env file
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sv-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let tenants_dir = config.tenants_dir()?;
    std::fs::create_dir_all(&tenants_dir)?;
    info!("Tenant databases under {}", tenants_dir.display());

    let tenants = TenantConnectionManager::new(tenants_dir)
        .with_max_connections(config.database.max_connections_per_tenant)
        .with_busy_timeout(config.busy_timeout())
        .with_max_tenants(config.database.max_tenants);

    let app_state = AppState::new(tenants, config.api.clone(), config.validation.clone());
    let tenants = app_state.tenants.clone();

    let app = build_router(app_state, cors_layer(&config.server.cors_origins)?);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tenants.close_all().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Graceful shutdown unavailable, stop the process to exit");
            std::future::pending::<()>().await;
        }
    }
}
