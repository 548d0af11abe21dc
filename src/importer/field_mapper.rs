// ==========================================
// Gestão de Processos - spreadsheet field mapper
// ==========================================
// Resolves header-name variation (numero/Numero/NUMERO, ...) into the
// canonical six-field record shape. Trim + default substitution only.
// ==========================================

use crate::domain::{ProcessoStatus, RawProcessoRecord};
use std::collections::HashMap;

const NUMERO_ALIASES: &[&str] = &["numero", "Numero", "NUMERO"];
const VARA_ALIASES: &[&str] = &["vara", "Vara", "VARA"];
const PARTES_ALIASES: &[&str] = &["partesEnvolvidas", "partes", "Partes", "PARTES"];
const TIPO_ALIASES: &[&str] = &["tipoPericia", "tipo", "Tipo", "TIPO"];
const PRAZOS_ALIASES: &[&str] = &["prazos", "Prazos", "PRAZOS"];
const STATUS_ALIASES: &[&str] = &["status", "Status", "STATUS"];

pub struct FieldMapper;

impl FieldMapper {
    /// Maps one string-keyed spreadsheet row to a candidate record.
    /// Unresolvable fields become empty strings so that the row still
    /// reaches validation and is reported there, not dropped here.
    pub fn map_row(&self, row: &HashMap<String, String>) -> RawProcessoRecord {
        let status = self
            .resolve(row, STATUS_ALIASES)
            .map(str::to_string)
            .unwrap_or_else(|| ProcessoStatus::default().as_str().to_string());

        RawProcessoRecord {
            numero: self.resolve_or_empty(row, NUMERO_ALIASES),
            vara: self.resolve_or_empty(row, VARA_ALIASES),
            partes_envolvidas: self.resolve_or_empty(row, PARTES_ALIASES),
            tipo_pericia: self.resolve_or_empty(row, TIPO_ALIASES),
            prazos: self.resolve_or_empty(row, PRAZOS_ALIASES),
            status: Some(status),
        }
    }

    /// Tries the alias spellings in priority order and returns the first
    /// value that is non-empty after trimming.
    fn resolve<'a>(&self, row: &'a HashMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
        for alias in aliases {
            if let Some(value) = row.get(*alias) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed);
                }
            }
        }
        None
    }

    fn resolve_or_empty(&self, row: &HashMap<String, String>, aliases: &[&str]) -> String {
        self.resolve(row, aliases).unwrap_or_default().to_string()
    }
}
