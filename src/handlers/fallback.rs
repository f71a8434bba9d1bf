use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::utils::logging::*;
use crate::utils::AppError;

/// Método não suportado numa rota existente → 405 JSON
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    log_warning(&format!("⚠️ {} {} - método não permitido", method, uri.path()));
    AppError::MethodNotAllowed
}

/// Rota inexistente → 404 JSON
pub async fn not_found(uri: Uri) -> Response {
    log_warning(&format!("⚠️ Rota não encontrada: {}", uri.path()));
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("Not found: {}", uri.path())
        })),
    )
        .into_response()
}
