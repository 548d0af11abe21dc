// ==========================================
// Gestão de Processos - HTTP API layer
// ==========================================

pub mod error;
pub mod import_api;
pub mod processo_api;

pub use error::{ApiError, ApiResult};
pub use import_api::import_processos;
pub use processo_api::{create_processo, list_processos};

use crate::repository::ProcessoRepository;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProcessoRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProcessoRepository>) -> Self {
        Self { repo }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/processos", get(list_processos).post(create_processo))
        .route("/api/processos/importar", post(import_processos))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "module": crate::APP_NAME,
        "version": crate::VERSION,
    }))
}
