use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use myob::MyobError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Variável de configuração obrigatória ausente
    #[error("{0}")]
    Config(String),

    /// MYOB devolveu `error` no redirect de autorização
    #[error("{message}")]
    UpstreamAuth {
        message: String,
        state: Option<String>,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Erro do MYOB com o status original repassado ao cliente
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::UpstreamAuth { .. } | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MyobError> for AppError {
    fn from(err: MyobError) -> Self {
        match err {
            MyobError::Config(_) => AppError::Config(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AppError::UpstreamAuth { message, state } => json!({
                "success": false,
                "error": message,
                "state": state
            }),
            other => json!({
                "success": false,
                "error": other.to_string()
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
