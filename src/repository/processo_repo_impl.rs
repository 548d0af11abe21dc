// ==========================================
// Gestão de Processos - rusqlite repository
// ==========================================
// Single connection behind a mutex; dates stored as ISO text, creation
// timestamps as RFC 3339. Schema is created on open.
// ==========================================

use crate::db;
use crate::domain::{NewProcesso, Processo, ProcessoStatus};
use crate::repository::error::RepositoryError;
use crate::repository::processo_repo::ProcessoRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};

const PROCESSO_COLUMNS: &str =
    "id, numero, vara, partes_envolvidas, tipo_pericia, prazos, status, created_at";

// ==========================================
// ProcessoRepositoryImpl
// ==========================================
pub struct ProcessoRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProcessoRepositoryImpl {
    /// Opens (or creates) the database at `db_path` and ensures the schema.
    pub fn new(db_path: &str) -> Result<Self, RepositoryError> {
        let conn = db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        db::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

fn row_to_processo(row: &Row<'_>) -> rusqlite::Result<Processo> {
    let prazos_raw: String = row.get(5)?;
    let prazos = NaiveDate::parse_from_str(&prazos_raw, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let status_raw: String = row.get(6)?;
    let status = ProcessoStatus::from_token(&status_raw).unwrap_or_default();

    let created_raw: String = row.get(7)?;
    let created_at = DateTime::parse_from_rfc3339(&created_raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Processo {
        id: row.get(0)?,
        numero: row.get(1)?,
        vara: row.get(2)?,
        partes_envolvidas: row.get(3)?,
        tipo_pericia: row.get(4)?,
        prazos,
        status,
        created_at,
    })
}

#[async_trait]
impl ProcessoRepository for ProcessoRepositoryImpl {
    async fn exists_numero(&self, numero: &str) -> Result<bool, RepositoryError> {
        let conn = self.lock()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT id FROM processo WHERE numero = ?1",
                params![numero],
                |row| row.get(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    async fn insert(&self, novo: NewProcesso) -> Result<Processo, RepositoryError> {
        let created_at = Utc::now();
        let conn = self.lock()?;

        conn.execute(
            r#"
            INSERT INTO processo (
                numero, vara, partes_envolvidas, tipo_pericia, prazos, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                novo.numero,
                novo.vara,
                novo.partes_envolvidas,
                novo.tipo_pericia,
                novo.prazos.format("%Y-%m-%d").to_string(),
                novo.status.as_str(),
                created_at.to_rfc3339(),
            ],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Processo {
            id,
            numero: novo.numero,
            vara: novo.vara,
            partes_envolvidas: novo.partes_envolvidas,
            tipo_pericia: novo.tipo_pericia,
            prazos: novo.prazos,
            status: novo.status,
            created_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<Processo>, RepositoryError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM processo ORDER BY created_at DESC, id DESC",
            PROCESSO_COLUMNS
        ))?;

        let processos = stmt
            .query_map([], row_to_processo)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(processos)
    }
}
