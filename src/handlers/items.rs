use axum::{extract::State, response::Json};
use myob::{TokenRequest, COMPANY_FILE_SCOPE};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::time::Instant;

use crate::utils::logging::*;
use crate::utils::{mask_secret, AppError, AppResult};
use crate::AppState;

/// GET /myob/items
///
/// Fluxo por requisição (sem cache de token):
/// 1. client credentials → access token
/// 2. GET da Item collection com o token
/// 3. `{success, data, count}`
pub async fn list_items(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let start_time = Instant::now();
    log_request_received("/myob/items", "GET");

    let myob = &state.settings.myob;
    let (credentials, company) = myob
        .oauth_credentials()
        .and_then(|credentials| Ok((credentials, myob.company_file()?)))
        .map_err(|missing| {
            log_missing_config("/myob/items", &missing.to_string());
            AppError::Config("Missing MYOB credentials".to_string())
        })?;

    let token = state
        .token_exchanger(credentials)
        .exchange(&TokenRequest::ClientCredentials {
            scope: COMPANY_FILE_SCOPE.to_string(),
        })
        .await
        .map_err(|e| {
            log_myob_api_error("client_credentials", e.upstream_status(), &e.to_string());
            AppError::from(e)
        })?;

    let access_token = token.bearer().ok_or_else(|| {
        log_error("❌ [MYOB] Token response sem access_token");
        AppError::Unauthorized("Failed to authenticate with MYOB".to_string())
    })?;

    tracing::debug!("🔑 [MYOB] Access token: {}", mask_secret(access_token, 12));

    let items = state
        .item_fetcher(company)
        .fetch_items(access_token)
        .await
        .map_err(|e| {
            log_myob_api_error("fetch_items", e.upstream_status(), &e.to_string());
            AppError::from(e)
        })?;

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed("/myob/items", 200, processing_time);

    Ok(Json(json!({
        "success": true,
        "count": items.len(),
        "data": items,
    })))
}
