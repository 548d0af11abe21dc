// ==========================================
// Gestão de Processos - case-record endpoints
// ==========================================
// GET  /api/processos  -> all records, newest first
// POST /api/processos  -> create one record
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::domain::{NewProcesso, Processo, ProcessoStatus};
use crate::importer::validator;
use crate::repository::error::RepositoryError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::error;

/// Create-record payload; all fields but status are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessoRequest {
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub vara: String,
    #[serde(default)]
    pub partes_envolvidas: String,
    #[serde(default)]
    pub tipo_pericia: String,
    #[serde(default)]
    pub prazos: String,
    #[serde(default)]
    pub status: Option<String>,
}

pub async fn list_processos(State(state): State<AppState>) -> ApiResult<Json<Vec<Processo>>> {
    let processos = state.repo.list_all().await.map_err(|e| {
        error!(error = %e, "falha ao listar processos");
        ApiError::DatabaseError("Erro interno do servidor".to_string())
    })?;

    Ok(Json(processos))
}

pub async fn create_processo(
    State(state): State<AppState>,
    Json(req): Json<CreateProcessoRequest>,
) -> ApiResult<(StatusCode, Json<Processo>)> {
    if req.numero.is_empty()
        || req.vara.is_empty()
        || req.partes_envolvidas.is_empty()
        || req.tipo_pericia.is_empty()
        || req.prazos.is_empty()
    {
        return Err(ApiError::InvalidInput(
            "Todos os campos obrigatórios devem ser preenchidos.".to_string(),
        ));
    }

    let ja_existe = state.repo.exists_numero(&req.numero).await.map_err(|e| {
        error!(error = %e, "falha ao verificar duplicidade");
        ApiError::DatabaseError("Erro ao criar o processo.".to_string())
    })?;
    if ja_existe {
        return Err(ApiError::InvalidInput(
            "Já existe um processo com este número.".to_string(),
        ));
    }

    let Some(prazos) = validator::parse_prazo(&req.prazos) else {
        return Err(ApiError::InvalidInput(format!(
            "Data inválida - {}",
            req.prazos
        )));
    };

    let novo = NewProcesso {
        numero: req.numero,
        vara: req.vara,
        partes_envolvidas: req.partes_envolvidas,
        tipo_pericia: req.tipo_pericia,
        prazos,
        status: ProcessoStatus::resolve(req.status.as_deref()),
    };

    match state.repo.insert(novo).await {
        Ok(processo) => Ok((StatusCode::CREATED, Json(processo))),
        // Insert racing another request past the pre-check.
        Err(RepositoryError::UniqueConstraintViolation(_)) => Err(ApiError::InvalidInput(
            "Já existe um processo com este número.".to_string(),
        )),
        Err(e) => {
            error!(error = %e, "falha ao criar processo");
            Err(ApiError::DatabaseError("Erro ao criar o processo.".to_string()))
        }
    }
}
