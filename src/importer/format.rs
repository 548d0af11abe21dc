// ==========================================
// Gestão de Processos - upload format detection
// ==========================================
// Pure classification over declared media type + file name; extraction
// strategy is chosen before any byte of the payload is inspected.
// ==========================================

/// Media type of a PDF upload.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Media types accepted for spreadsheet uploads.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// Extraction strategy for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Pipe-delimited records inside a PDF document, one per line.
    DelimitedText,
    /// Header + data rows in the first worksheet of a spreadsheet.
    Tabular,
    /// Anything else; the import fails before extraction.
    Unsupported,
}

impl FileFormat {
    /// Classifies an upload. Rules applied in order:
    /// 1. exact PDF media type -> DelimitedText
    /// 2. spreadsheet media type, or file name ending in `.xlsx`/`.xls`
    ///    (suffix match is case-sensitive) -> Tabular
    /// 3. otherwise -> Unsupported
    pub fn detect(content_type: &str, file_name: &str) -> Self {
        if content_type == PDF_CONTENT_TYPE {
            return FileFormat::DelimitedText;
        }

        if content_type == XLSX_CONTENT_TYPE
            || content_type == XLS_CONTENT_TYPE
            || file_name.ends_with(".xlsx")
            || file_name.ends_with(".xls")
        {
            return FileFormat::Tabular;
        }

        FileFormat::Unsupported
    }
}
