// ==========================================
// Gestão de Processos - runtime configuration
// ==========================================
// Zero-config startup: environment overrides, platform defaults below.
// ==========================================

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Bind address when PROCESSOS_BIND is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Resolves configuration from the environment.
    ///
    /// - PROCESSOS_BIND: listen address (default 127.0.0.1:8080)
    /// - PROCESSOS_DB: SQLite file path (default: platform data dir)
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("PROCESSOS_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let db_path = env::var("PROCESSOS_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        Self { bind_addr, db_path }
    }

    /// Creates the database's parent directory when missing.
    pub fn ensure_data_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("processos")
        .join("processos.db")
}
