// ==========================================
// Gestão de Processos - importer trait
// ==========================================
// Interface only; orchestration lives in the implementation.
// ==========================================

use crate::domain::ImportOutcome;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// ProcessoImporter trait
// ==========================================
// Implementor: ProcessoImporterImpl
#[async_trait]
pub trait ProcessoImporter: Send + Sync {
    /// Imports case records from one uploaded file.
    ///
    /// # Parameters
    /// - file_name: name declared by the upload (used for format detection)
    /// - content_type: declared media type
    /// - data: raw file bytes
    ///
    /// # Returns
    /// - Ok(ImportOutcome): inserted count + one warning per rejected row
    /// - Err(ImportError): request-fatal failure, nothing was committed by
    ///   the failing phase (rows committed before a store fault remain)
    ///
    /// # Pipeline
    /// 1. format detection (media type + file name)
    /// 2. record extraction (delimited text or tabular)
    /// 3. per-row validation, deduplication and insert, in row order
    async fn import_file(
        &self,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> ImportResult<ImportOutcome>;
}
