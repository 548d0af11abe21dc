// ==========================================
// Gestão de Processos - core library
// ==========================================
// Record management for judicial case files: create, list and bulk
// import with per-row diagnostics.
// Stack: axum + rusqlite + calamine/pdf-extract
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Import layer - external data
pub mod importer;

// Configuration
pub mod config;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// API layer - HTTP interface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

pub use api::{build_router, AppState};
pub use config::AppConfig;
pub use domain::{ImportOutcome, NewProcesso, Processo, ProcessoStatus, RawProcessoRecord};
pub use importer::{ProcessoImporter, ProcessoImporterImpl};
pub use repository::{ProcessoRepository, ProcessoRepositoryImpl};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Service name
pub const APP_NAME: &str = "processos";
