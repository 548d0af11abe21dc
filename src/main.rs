// ==========================================
// Gestão de Processos - service entry point
// ==========================================

use anyhow::Result;
use processos::{build_router, AppConfig, AppState, ProcessoRepositoryImpl};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    processos::logging::init();

    info!("Starting {} v{}", processos::APP_NAME, processos::VERSION);

    let config = AppConfig::from_env();
    config.ensure_data_dir()?;

    let db_path = config.db_path.display().to_string();
    info!("Database path: {}", db_path);

    let repo = ProcessoRepositoryImpl::new(&db_path)?;
    let state = AppState::new(Arc::new(repo));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("processos listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
