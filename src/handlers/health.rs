use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::AuthorizeConfig;
use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "myob-items-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Informa quais grupos de credenciais estão configurados. Não contata o MYOB.
pub async fn ready_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let myob = &state.settings.myob;

    Json(json!({
        "ready": true,
        "service": "myob-items-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "dependencies": {
            "myob": {
                "authorize": AuthorizeConfig::from_settings(myob).is_ok(),
                "token": myob.oauth_credentials().is_ok(),
                "company_file": myob.company_file().is_ok()
            }
        }
    }))
}
