// ==========================================
// Gestão de Processos - import layer errors
// ==========================================
// Display strings are the user-facing messages returned by the API;
// diagnostic detail stays in the variant payloads and goes to the log.
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Request-fatal import failures. Row-level problems never surface here;
/// they are collected as warnings by the batch committer.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== upload errors =====
    #[error("Nenhum arquivo foi enviado.")]
    MissingFile,

    #[error("Tipo de arquivo não suportado. Use PDF ou Excel (.xlsx, .xls).")]
    UnsupportedFormat {
        content_type: String,
        file_name: String,
    },

    // ===== source container errors =====
    #[error("Erro ao processar arquivo PDF. Verifique o formato.")]
    PdfParse(String),

    #[error("Erro ao processar planilha. Verifique o formato e as colunas.")]
    SpreadsheetParse(String),

    // ===== extraction result errors =====
    #[error("Nenhum processo válido foi encontrado no arquivo.")]
    NoValidRecords,

    // ===== store errors =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result alias for the import layer.
pub type ImportResult<T> = Result<T, ImportError>;

impl ImportError {
    /// Whether the failure is the caller's fault (bad upload) rather than
    /// an internal fault. Drives the 400/500 split at the API boundary.
    pub fn is_request_fatal(&self) -> bool {
        !matches!(self, ImportError::Repository(_))
    }
}
