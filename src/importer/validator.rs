// ==========================================
// Gestão de Processos - per-row validation helpers
// ==========================================
// Pure checks used by the batch committer; no store access here.
// ==========================================

use crate::domain::RawProcessoRecord;
use chrono::{DateTime, NaiveDate};

/// Deadline formats tried in order before the RFC 3339 fallback.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// All five required fields must be non-empty. Fields arrive already
/// trimmed from extraction, so emptiness here means genuinely blank.
pub fn required_fields_present(record: &RawProcessoRecord) -> bool {
    !(record.numero.is_empty()
        || record.vara.is_empty()
        || record.partes_envolvidas.is_empty()
        || record.tipo_pericia.is_empty()
        || record.prazos.is_empty())
}

/// Parses a raw deadline value into a calendar date.
/// Accepts ISO dates, Brazilian day-first dates and RFC 3339 timestamps.
pub fn parse_prazo(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
