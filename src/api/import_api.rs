// ==========================================
// Gestão de Processos - bulk import endpoint
// ==========================================
// POST /api/processos/importar - multipart form with one `file` field.
// Per-row problems come back as warnings in the 200 response; only the
// request-fatal cases produce an error status.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::domain::ImportOutcome;
use crate::importer::{ProcessoImporter, ProcessoImporterImpl};
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// Import report returned on success. `erros` is omitted entirely when
/// every row was inserted, so a clean import carries no warnings field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub message: String,
    pub processos_inseridos: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erros: Option<Vec<String>>,
}

impl From<ImportOutcome> for ImportResponse {
    fn from(outcome: ImportOutcome) -> Self {
        ImportResponse {
            message: format!(
                "Importação concluída. {} processos inseridos.",
                outcome.inserted
            ),
            processos_inseridos: outcome.inserted,
            erros: if outcome.warnings.is_empty() {
                None
            } else {
                Some(outcome.warnings)
            },
        }
    }
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

pub async fn import_processos(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ImportResponse>> {
    let upload = read_file_field(&mut multipart).await?;

    let Some(upload) = upload else {
        return Err(ApiError::InvalidInput(
            "Nenhum arquivo foi enviado.".to_string(),
        ));
    };

    let importer = ProcessoImporterImpl::new(state.repo.clone());
    let outcome = importer
        .import_file(&upload.file_name, &upload.content_type, &upload.data)
        .await?;

    Ok(Json(ImportResponse::from(outcome)))
}

async fn read_file_field(multipart: &mut Multipart) -> ApiResult<Option<UploadedFile>> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            error!(error = %e, "falha ao ler multipart");
            ApiError::InternalError("Erro interno do servidor durante a importação.".to_string())
        })?;

        let Some(field) = field else {
            return Ok(None);
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|e| {
            error!(error = %e, "falha ao ler o arquivo enviado");
            ApiError::InternalError("Erro interno do servidor durante a importação.".to_string())
        })?;

        return Ok(Some(UploadedFile {
            file_name,
            content_type,
            data: data.to_vec(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_omits_erros_when_clean() {
        let response = ImportResponse::from(ImportOutcome {
            inserted: 2,
            warnings: vec![],
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["message"],
            "Importação concluída. 2 processos inseridos."
        );
        assert_eq!(json["processosInseridos"], 2);
        assert!(json.get("erros").is_none());
    }

    #[test]
    fn test_report_carries_warnings_in_order() {
        let response = ImportResponse::from(ImportOutcome {
            inserted: 1,
            warnings: vec![
                "Linha 1: Campos obrigatórios em branco".to_string(),
                "Linha 3: Data inválida - not-a-date".to_string(),
            ],
        });

        let json = serde_json::to_value(&response).unwrap();
        let erros = json["erros"].as_array().unwrap();
        assert_eq!(erros.len(), 2);
        assert_eq!(erros[0], "Linha 1: Campos obrigatórios em branco");
        assert_eq!(erros[1], "Linha 3: Data inválida - not-a-date");
    }
}
