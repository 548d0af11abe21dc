// ==========================================
// Gestão de Processos - SQLite connection setup
// ==========================================
// Central place for Connection::open so every connection gets the same
// PRAGMA behavior, plus schema creation on startup.
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS processo (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    numero TEXT NOT NULL UNIQUE,
    vara TEXT NOT NULL,
    partes_envolvidas TEXT NOT NULL,
    tipo_pericia TEXT NOT NULL,
    prazos TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'EM_ANDAMENTO',
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_processo_created_at ON processo(created_at);
"#;

/// Applies the per-connection PRAGMAs.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// re-applied on every open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Opens a SQLite connection with the unified configuration.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Creates the schema when missing. Idempotent.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
