// ==========================================
// Gestão de Processos - repository trait
// ==========================================
// Interface only; the rusqlite implementation lives alongside.
// ==========================================

use crate::domain::{NewProcesso, Processo};
use crate::repository::error::RepositoryError;
use async_trait::async_trait;

// ==========================================
// ProcessoRepository trait
// ==========================================
// Implementor: ProcessoRepositoryImpl (rusqlite)
#[async_trait]
pub trait ProcessoRepository: Send + Sync {
    /// Checks whether a case with this numero is already stored.
    ///
    /// Advisory under concurrency: the UNIQUE constraint enforced by
    /// `insert` is authoritative.
    async fn exists_numero(&self, numero: &str) -> Result<bool, RepositoryError>;

    /// Inserts a new case record and returns it with its assigned id and
    /// creation timestamp.
    ///
    /// # Errors
    /// - UniqueConstraintViolation when numero is already taken
    /// - other variants for database faults
    async fn insert(&self, novo: NewProcesso) -> Result<Processo, RepositoryError>;

    /// Returns all case records, newest created first.
    async fn list_all(&self) -> Result<Vec<Processo>, RepositoryError>;
}
