// ==========================================
// Gestão de Processos - record extractors
// ==========================================
// Two extraction strategies behind one interface, chosen by format
// detection. Both converge on the same candidate record shape; all
// per-row validation happens later in the batch committer.
// ==========================================

use crate::domain::RawProcessoRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use calamine::{open_workbook_auto_from_rs, Reader};
use std::collections::HashMap;
use std::io::Cursor;

/// Number of pipe-separated fields a delimited line must carry to count
/// as a record. The sixth (status) field is optional.
const MIN_DELIMITED_FIELDS: usize = 5;

// ==========================================
// RecordExtractor trait
// ==========================================
// Implementors: DelimitedTextExtractor, TabularExtractor
pub trait RecordExtractor: Send + Sync {
    /// Extracts candidate records from the raw upload bytes.
    ///
    /// Returns an error only when the source container itself cannot be
    /// read; an empty result is the caller's concern.
    fn extract(&self, data: &[u8]) -> ImportResult<Vec<RawProcessoRecord>>;
}

// ==========================================
// DelimitedTextExtractor - PDF uploads
// ==========================================
// Expects one record per non-blank line of the extracted text:
// NUMERO|VARA|PARTES|TIPO_PERICIA|PRAZOS|STATUS
pub struct DelimitedTextExtractor;

impl DelimitedTextExtractor {
    /// Parses already-extracted document text into candidate records.
    ///
    /// Lines with fewer than five fields are not part of the batch at all:
    /// they are dropped without a diagnostic. Fields beyond the sixth are
    /// ignored; a missing or blank sixth field leaves the status absent.
    pub fn records_from_text(&self, texto: &str) -> Vec<RawProcessoRecord> {
        texto
            .lines()
            .filter(|linha| !linha.trim().is_empty())
            .filter_map(|linha| {
                let campos: Vec<&str> = linha.split('|').collect();
                if campos.len() < MIN_DELIMITED_FIELDS {
                    return None;
                }

                let status = campos
                    .get(5)
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);

                Some(RawProcessoRecord {
                    numero: campos[0].trim().to_string(),
                    vara: campos[1].trim().to_string(),
                    partes_envolvidas: campos[2].trim().to_string(),
                    tipo_pericia: campos[3].trim().to_string(),
                    prazos: campos[4].trim().to_string(),
                    status,
                })
            })
            .collect()
    }
}

impl RecordExtractor for DelimitedTextExtractor {
    fn extract(&self, data: &[u8]) -> ImportResult<Vec<RawProcessoRecord>> {
        let texto = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ImportError::PdfParse(e.to_string()))?;

        Ok(self.records_from_text(&texto))
    }
}

// ==========================================
// TabularExtractor - spreadsheet uploads
// ==========================================
// Reads the first worksheet; the first row is the header. Rows whose
// cells are all empty are not part of the logical table and are skipped;
// every other row yields exactly one candidate via alias resolution.
pub struct TabularExtractor;

impl RecordExtractor for TabularExtractor {
    fn extract(&self, data: &[u8]) -> ImportResult<Vec<RawProcessoRecord>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| ImportError::SpreadsheetParse(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::SpreadsheetParse("planilha sem abas".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::SpreadsheetParse(e.to_string()))?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Ok(Vec::new());
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mapper = FieldMapper;
        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = HashMap::new();
            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(mapper.map_row(&row_map));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_basic_lines() {
        let extractor = DelimitedTextExtractor;
        let texto = "123|1a Vara|A vs B|Medica|2025-01-01\n456|2a Vara|C vs D|Contabil|2025-02-01|CONCLUIDO";

        let records = extractor.records_from_text(texto);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].numero, "123");
        assert_eq!(records[0].status, None);
        assert_eq!(records[1].numero, "456");
        assert_eq!(records[1].status.as_deref(), Some("CONCLUIDO"));
    }

    #[test]
    fn test_delimited_skips_blank_lines() {
        let extractor = DelimitedTextExtractor;
        let texto = "\n   \n123|1a Vara|A vs B|Medica|2025-01-01\n\n";

        let records = extractor.records_from_text(texto);

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_delimited_drops_short_lines_silently() {
        // fewer than five fields: not part of the batch, no diagnostic
        let extractor = DelimitedTextExtractor;
        let texto = "cabecalho do relatorio\n123|1a Vara|A vs B|Medica|2025-01-01\nso|tres|campos";

        let records = extractor.records_from_text(texto);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].numero, "123");
    }

    #[test]
    fn test_delimited_trims_fields() {
        let extractor = DelimitedTextExtractor;
        let texto = " 123 | 1a Vara | A vs B | Medica | 2025-01-01 | CONCLUIDO ";

        let records = extractor.records_from_text(texto);

        assert_eq!(records[0].numero, "123");
        assert_eq!(records[0].vara, "1a Vara");
        assert_eq!(records[0].prazos, "2025-01-01");
        assert_eq!(records[0].status.as_deref(), Some("CONCLUIDO"));
    }

    #[test]
    fn test_delimited_blank_status_is_absent() {
        let extractor = DelimitedTextExtractor;
        let texto = "123|1a Vara|A vs B|Medica|2025-01-01|   ";

        let records = extractor.records_from_text(texto);

        assert_eq!(records[0].status, None);
    }

    #[test]
    fn test_delimited_ignores_extra_fields() {
        let extractor = DelimitedTextExtractor;
        let texto = "123|1a Vara|A vs B|Medica|2025-01-01|CONCLUIDO|extra|mais";

        let records = extractor.records_from_text(texto);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status.as_deref(), Some("CONCLUIDO"));
    }

    #[test]
    fn test_delimited_empty_text_yields_no_records() {
        let extractor = DelimitedTextExtractor;
        assert!(extractor.records_from_text("").is_empty());
    }

    #[test]
    fn test_tabular_rejects_garbage_bytes() {
        let extractor = TabularExtractor;
        let result = extractor.extract(b"definitely not a spreadsheet");
        assert!(matches!(result, Err(ImportError::SpreadsheetParse(_))));
    }

    #[test]
    fn test_pdf_rejects_garbage_bytes() {
        let extractor = DelimitedTextExtractor;
        let result = extractor.extract(b"definitely not a pdf");
        assert!(matches!(result, Err(ImportError::PdfParse(_))));
    }
}
