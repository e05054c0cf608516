use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Connect the store, apply migrations and optionally load demo data.
pub async fn build_state(database: &DatabaseConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(database).await?;

    if database.run_migrations {
        models::db::run_migrations(&db)
            .await
            .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
        info!("migrations applied");
    }

    if database.seed_demo_data {
        let seeded = service::seed::seed_demo_data(&db)
            .await
            .map_err(|e| StartupError::Runtime(format!("seeding failed: {e}")))?;
        info!(seeded, "demo data check done");
    }

    Ok(ServerState { db })
}

/// Router with CORS and tracing layers over the given state.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting zoo records server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
