//! Document access handlers
//!
//! Each editable document is one JSON object in the bucket. GET returns it
//! byte for byte, POST overwrites it whole. Pins are read-only.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, info};
use tripdeck_core::DocumentKind;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/{trip|todo|note}`
pub async fn get_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let kind = editable_kind(&name)?;
    read(state, kind).await
}

/// `POST /api/{trip|todo|note}`
pub async fn post_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let kind = editable_kind(&name)?;
    serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

    let store = state.store.clone();
    let size = body.len();
    run_blocking(move || store.put(kind.key(), &body)).await?;
    info!(key = kind.key(), bytes = size, "Document overwritten");

    Ok((StatusCode::OK, Json(json!({ "ok": true }))).into_response())
}

/// `GET /api/pins`
pub async fn get_pins(State(state): State<AppState>) -> Result<Response, ApiError> {
    read(state, DocumentKind::Pins).await
}

/// Anything but GET on `/api/pins`
pub async fn pins_not_allowed(method: Method) -> ApiError {
    debug!(%method, "Rejected write to pins");
    ApiError::MethodNotAllowed(method)
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

fn editable_kind(name: &str) -> Result<DocumentKind, ApiError> {
    match name.parse::<DocumentKind>() {
        Ok(kind) if kind.is_writable() => Ok(kind),
        _ => Err(ApiError::NotFound(format!("no document named '{}'", name))),
    }
}

async fn read(state: AppState, kind: DocumentKind) -> Result<Response, ApiError> {
    let store = state.store.clone();
    let bytes = run_blocking(move || store.get(kind.key())).await?;
    Ok(([(CONTENT_TYPE, "application/json")], bytes).into_response())
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> tripdeck_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}
