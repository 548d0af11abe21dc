// ==========================================
// Gestão de Processos - importer implementation
// ==========================================
// Pipeline: detect -> extract -> validate/commit per row -> outcome
// Rows are processed strictly in order; a bad row is recorded and the
// batch continues. Only a store fault or an empty extraction aborts.
// ==========================================

use crate::domain::{ImportOutcome, NewProcesso, ProcessoStatus, RawProcessoRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::extractor::{DelimitedTextExtractor, RecordExtractor, TabularExtractor};
use crate::importer::format::FileFormat;
use crate::importer::processo_importer::ProcessoImporter;
use crate::importer::validator;
use crate::repository::error::RepositoryError;
use crate::repository::ProcessoRepository;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ProcessoImporterImpl
// ==========================================
pub struct ProcessoImporterImpl {
    repo: Arc<dyn ProcessoRepository>,
}

impl ProcessoImporterImpl {
    pub fn new(repo: Arc<dyn ProcessoRepository>) -> Self {
        Self { repo }
    }

    fn extractor_for(format: FileFormat) -> Option<Box<dyn RecordExtractor>> {
        match format {
            FileFormat::DelimitedText => Some(Box::new(DelimitedTextExtractor)),
            FileFormat::Tabular => Some(Box::new(TabularExtractor)),
            FileFormat::Unsupported => None,
        }
    }

    /// Validates and persists an ordered batch of candidate records.
    ///
    /// Row numbers in diagnostics are 1-based positions within the batch.
    /// Per row: required fields, duplicate check, deadline parse, status
    /// resolution, insert. Each failure yields one warning and the batch
    /// moves on; only a store fault (anything other than the uniqueness
    /// constraint firing on insert) aborts the batch.
    pub async fn commit_batch(
        &self,
        records: Vec<RawProcessoRecord>,
    ) -> ImportResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        for (idx, record) in records.into_iter().enumerate() {
            let linha = idx + 1;

            if !validator::required_fields_present(&record) {
                outcome
                    .warnings
                    .push(format!("Linha {}: Campos obrigatórios em branco", linha));
                continue;
            }

            // Advisory pre-check; the UNIQUE constraint on insert is the
            // real arbiter under concurrent imports.
            if self.repo.exists_numero(&record.numero).await? {
                outcome.warnings.push(format!(
                    "Linha {}: Processo {} já existe",
                    linha, record.numero
                ));
                continue;
            }

            let Some(prazos) = validator::parse_prazo(&record.prazos) else {
                outcome.warnings.push(format!(
                    "Linha {}: Data inválida - {}",
                    linha, record.prazos
                ));
                continue;
            };

            let status = ProcessoStatus::resolve(record.status.as_deref());

            let novo = NewProcesso {
                numero: record.numero.clone(),
                vara: record.vara,
                partes_envolvidas: record.partes_envolvidas,
                tipo_pericia: record.tipo_pericia,
                prazos,
                status,
            };

            match self.repo.insert(novo).await {
                Ok(_) => outcome.inserted += 1,
                Err(RepositoryError::UniqueConstraintViolation(msg)) => {
                    // Lost the race against a concurrent import of the
                    // same numero between the pre-check and the insert.
                    warn!(linha, numero = %record.numero, error = %msg, "insert rejeitado");
                    outcome.warnings.push(format!(
                        "Linha {}: Erro ao inserir processo {}",
                        linha, record.numero
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(outcome)
    }
}

#[async_trait::async_trait]
impl ProcessoImporter for ProcessoImporterImpl {
    #[instrument(skip_all, fields(batch_id, file_name = %file_name))]
    async fn import_file(
        &self,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> ImportResult<ImportOutcome> {
        let batch_id = Uuid::new_v4();
        tracing::Span::current().record("batch_id", tracing::field::display(batch_id));

        let format = FileFormat::detect(content_type, file_name);
        debug!(?format, content_type, "formato detectado");

        let extractor =
            Self::extractor_for(format).ok_or_else(|| ImportError::UnsupportedFormat {
                content_type: content_type.to_string(),
                file_name: file_name.to_string(),
            })?;

        let records = extractor.extract(data)?;
        if records.is_empty() {
            return Err(ImportError::NoValidRecords);
        }

        info!(total = records.len(), "registros extraídos do arquivo");

        let outcome = self.commit_batch(records).await?;

        info!(
            inserted = outcome.inserted,
            rejected = outcome.warnings.len(),
            "importação concluída"
        );

        Ok(outcome)
    }
}
