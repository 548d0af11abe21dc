// ==========================================
// Gestão de Processos - case-record domain model
// ==========================================
// processo: one judicial case file, keyed by its case number (numero)
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ProcessoStatus - case workflow status
// ==========================================
// Serialized as SCREAMING_SNAKE_CASE, matching the stored tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessoStatus {
    #[default]
    EmAndamento,
    Aguardando,
    Concluido,
}

impl ProcessoStatus {
    /// Parses a raw status token. Membership is decided against the fixed
    /// value set; anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "EM_ANDAMENTO" => Some(ProcessoStatus::EmAndamento),
            "AGUARDANDO" => Some(ProcessoStatus::Aguardando),
            "CONCLUIDO" => Some(ProcessoStatus::Concluido),
            _ => None,
        }
    }

    /// Resolves an optional raw token to a status, falling back to the
    /// default for absent or unknown tokens. Never fails.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_token).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessoStatus::EmAndamento => "EM_ANDAMENTO",
            ProcessoStatus::Aguardando => "AGUARDANDO",
            ProcessoStatus::Concluido => "CONCLUIDO",
        }
    }
}

impl fmt::Display for ProcessoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Processo - persisted case record
// ==========================================
// Written once at insert, never updated or deleted here.
// Wire form is camelCase, matching the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processo {
    pub id: i64,                    // store-assigned identity
    pub numero: String,             // case number, unique natural key
    pub vara: String,               // court
    pub partes_envolvidas: String,  // involved parties
    pub tipo_pericia: String,       // expert-exam type
    pub prazos: NaiveDate,          // deadline (calendar date)
    pub status: ProcessoStatus,
    pub created_at: DateTime<Utc>,  // set at insertion
}

// ==========================================
// NewProcesso - validated insert payload
// ==========================================
// Identity and created_at are store-owned; everything else arrives here.
#[derive(Debug, Clone)]
pub struct NewProcesso {
    pub numero: String,
    pub vara: String,
    pub partes_envolvidas: String,
    pub tipo_pericia: String,
    pub prazos: NaiveDate,
    pub status: ProcessoStatus,
}

// ==========================================
// RawProcessoRecord - import pipeline intermediate
// ==========================================
// Produced by extraction, consumed by the batch committer; lives only
// within one import call. Fields are trimmed but may be empty; emptiness
// is a validation concern, not an extraction concern. `status` is `None`
// when the source carried no usable token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProcessoRecord {
    pub numero: String,
    pub vara: String,
    pub partes_envolvidas: String,
    pub tipo_pericia: String,
    pub prazos: String,
    pub status: Option<String>,
}

// ==========================================
// ImportOutcome - batch commit result
// ==========================================
// One warning per skipped or failed row, in row order.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub warnings: Vec<String>,
}
