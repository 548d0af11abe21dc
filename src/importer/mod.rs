// ==========================================
// Gestão de Processos - import layer
// ==========================================
// Turns an uploaded file into persisted case records:
// format detection -> extraction -> per-row validation -> commit
// Supported sources: PDF (pipe-delimited lines), Excel (.xlsx/.xls)
// ==========================================

pub mod error;
pub mod extractor;
pub mod field_mapper;
pub mod format;
pub mod processo_importer;
pub mod processo_importer_impl;
pub mod validator;

pub use error::{ImportError, ImportResult};
pub use extractor::{DelimitedTextExtractor, RecordExtractor, TabularExtractor};
pub use field_mapper::FieldMapper;
pub use format::FileFormat;
pub use processo_importer::ProcessoImporter;
pub use processo_importer_impl::ProcessoImporterImpl;
