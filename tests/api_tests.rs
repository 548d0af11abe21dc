// ==========================================
// HTTP API integration tests
// ==========================================
// Exercises the router end to end with tower::oneshot against a real
// temp database: record creation, listing and the import endpoint's
// request-fatal paths.
// ==========================================

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use processos::{build_router, AppState, ProcessoRepositoryImpl};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::util::ServiceExt; // for `oneshot`

fn setup_app() -> (NamedTempFile, axum::Router) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp db");
    let repo = ProcessoRepositoryImpl::new(temp_file.path().to_str().unwrap())
        .expect("Failed to create repository");
    let state = AppState::new(Arc::new(repo));
    (temp_file, build_router(state))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Builds a single-field multipart upload the way a browser form would.
fn multipart_request(
    field_name: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Request<Body> {
    let boundary = "processos-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/processos/importar")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn valid_create_body() -> Value {
    json!({
        "numero": "0001234-56.2025.8.26.0100",
        "vara": "1a Vara Cível",
        "partesEnvolvidas": "Fulano vs Sicrano",
        "tipoPericia": "Medica",
        "prazos": "2025-06-30"
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_temp, app) = setup_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "processos");
    assert!(body["version"].is_string());
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_processo_returns_201_with_record() {
    let (_temp, app) = setup_app();

    let response = app
        .oneshot(json_request("POST", "/api/processos", valid_create_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["numero"], "0001234-56.2025.8.26.0100");
    assert_eq!(body["partesEnvolvidas"], "Fulano vs Sicrano");
    assert_eq!(body["prazos"], "2025-06-30");
    assert_eq!(body["status"], "EM_ANDAMENTO");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_processo_with_explicit_status() {
    let (_temp, app) = setup_app();

    let mut payload = valid_create_body();
    payload["status"] = json!("CONCLUIDO");

    let response = app
        .oneshot(json_request("POST", "/api/processos", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "CONCLUIDO");
}

#[tokio::test]
async fn test_create_processo_unknown_status_defaults() {
    let (_temp, app) = setup_app();

    let mut payload = valid_create_body();
    payload["status"] = json!("INVALID_TOKEN");

    let response = app
        .oneshot(json_request("POST", "/api/processos", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "EM_ANDAMENTO");
}

#[tokio::test]
async fn test_create_processo_missing_field_rejected() {
    let (_temp, app) = setup_app();

    let mut payload = valid_create_body();
    payload.as_object_mut().unwrap().remove("vara");

    let response = app
        .oneshot(json_request("POST", "/api/processos", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["error"],
        "Todos os campos obrigatórios devem ser preenchidos."
    );
}

#[tokio::test]
async fn test_create_processo_duplicate_numero_rejected() {
    let (_temp, app) = setup_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/processos", valid_create_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/api/processos", valid_create_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Já existe um processo com este número.");
}

#[tokio::test]
async fn test_create_processo_invalid_date_rejected() {
    let (_temp, app) = setup_app();

    let mut payload = valid_create_body();
    payload["prazos"] = json!("not-a-date");

    let response = app
        .oneshot(json_request("POST", "/api/processos", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Data inválida - not-a-date");
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_processos_newest_first() {
    let (_temp, app) = setup_app();

    for numero in ["111", "222", "333"] {
        let mut payload = valid_create_body();
        payload["numero"] = json!(numero);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/processos", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/api/processos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let numeros: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["numero"].as_str().unwrap())
        .collect();
    assert_eq!(numeros, vec!["333", "222", "111"]);
}

#[tokio::test]
async fn test_list_processos_empty() {
    let (_temp, app) = setup_app();

    let response = app.oneshot(get_request("/api/processos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// =============================================================================
// Import - request-fatal paths
// =============================================================================

#[tokio::test]
async fn test_import_without_file_field_rejected() {
    let (_temp, app) = setup_app();

    let request = multipart_request("other", "dados.pdf", "application/pdf", b"irrelevant");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Nenhum arquivo foi enviado.");
}

#[tokio::test]
async fn test_import_unsupported_media_type_rejected() {
    let (_temp, app) = setup_app();

    let request = multipart_request(
        "file",
        "processos.txt",
        "text/plain",
        b"123|1a Vara|A vs B|Medica|2025-01-01",
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["error"],
        "Tipo de arquivo não suportado. Use PDF ou Excel (.xlsx, .xls)."
    );
}

#[tokio::test]
async fn test_import_unreadable_pdf_rejected() {
    let (_temp, app) = setup_app();

    let request = multipart_request(
        "file",
        "processos.pdf",
        "application/pdf",
        b"not really a pdf",
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["error"],
        "Erro ao processar arquivo PDF. Verifique o formato."
    );
}

#[tokio::test]
async fn test_import_unreadable_spreadsheet_rejected() {
    let (_temp, app) = setup_app();

    // extension alone routes to the tabular extractor, which then fails
    let request = multipart_request(
        "file",
        "processos.xlsx",
        "application/octet-stream",
        b"not really a spreadsheet",
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["error"],
        "Erro ao processar planilha. Verifique o formato e as colunas."
    );
}
