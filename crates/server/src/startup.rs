use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, create the tables and load the seed files. The store starts empty
/// on every launch, so this is the whole bootstrap.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::create_tables(&db).await?;
    service::seed::load_seed(&db, &cfg.seed).await.map_err(StartupError::Seed)?;
    Ok(AppState::new(db))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: bootstrap the store and serve HTTP until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(service = "server", event = "listening", %addr, "serving order board");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
