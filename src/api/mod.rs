//! HTTP layer exposing both assessment paths.

pub mod routes;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::risk::ensemble::Ensemble;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub ensemble: Arc<Ensemble>,
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let ensemble = Arc::new(Ensemble::new());
    // Train up front so the first request does not pay the cost.
    ensemble.ensure_trained(&settings)?;

    let state = AppState {
        settings: settings.clone(),
        ensemble,
    };
    let router = Router::new()
        .route("/assess", post(routes::assess))
        .route("/outlook/:city", get(routes::outlook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving health-sentinel API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
