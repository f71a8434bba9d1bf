//! OAuth2 HTTP Handlers
//!
//! Endpoints HTTP dos fluxos authorization code e client credentials

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use myob::{MyobError, TokenRequest, COMPANY_FILE_SCOPE};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::AuthorizeConfig;
use crate::utils::logging::*;
use crate::utils::{mask_secret, AppError, AppResult};
use crate::AppState;

/// Parâmetros do callback OAuth2
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    /// Authorization code retornado pelo MYOB
    pub code: Option<String>,
    /// Repassado sem alteração nas respostas de erro
    pub state: Option<String>,
    /// Erro retornado pelo MYOB (se houver)
    pub error: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /myob/auth
///
/// Inicia o fluxo OAuth2 redirecionando o usuário para a página de autorização do MYOB
///
/// # Retorno
/// - `302 Found`: Redireciona para `{base_url}/oauth/authorize`
/// - `400`: client id, redirect URI ou base URL ausente (nenhum redirect)
pub async fn start_authorization(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    log_info("🚀 [OAuth2] Iniciando fluxo de autorização...");

    let config = AuthorizeConfig::from_settings(&state.settings.myob).map_err(|missing| {
        log_missing_config("/myob/auth", &missing.to_string());
        AppError::Config("Missing MYOB configuration in environment variables".to_string())
    })?;

    let auth_url = config.authorization_url();

    log_info(&format!("↗️  [OAuth2] Redirecionando para: {}", auth_url));

    Ok((StatusCode::FOUND, [(header::LOCATION, auth_url)]).into_response())
}

/// GET /myob/callback?code=XXX&state=YYY
///
/// Recebe o callback OAuth2 do MYOB e troca o code por access token.
/// Os casos `error` e `code` ausente respondem sem contatar o token endpoint.
pub async fn handle_callback(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CallbackParams>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(params) = query.map_err(|rejection| {
        log_error(&format!("❌ [OAuth2] Query do callback inválida: {}", rejection.body_text()));
        AppError::Validation(format!("Invalid callback query: {}", rejection.body_text()))
    })?;
    let CallbackParams { code, state: oauth_state, error } = params;
    let code = non_empty(code);

    log_info(&format!(
        "📥 [OAuth2] Callback recebido (code: {}, error: {:?}, state: {:?})",
        if code.is_some() { "present" } else { "missing" },
        error,
        oauth_state
    ));

    // Verificar se houve erro na autorização
    if let Some(error) = non_empty(error) {
        log_error(&format!("❌ [OAuth2] Erro na autorização: {}", error));
        return Err(AppError::UpstreamAuth {
            message: format!("MYOB authorization failed: {}", error),
            state: oauth_state,
        });
    }

    let code = code.ok_or_else(|| {
        log_error("❌ [OAuth2] Code não recebido no callback");
        AppError::Validation("Missing authorization code".to_string())
    })?;

    let (credentials, redirect_uri) =
        state.settings.myob.code_exchange_credentials().map_err(|missing| {
            log_missing_config("/myob/callback", &missing.to_string());
            AppError::Config(
                "Missing MYOB configuration: clientId, clientSecret, or redirectUri".to_string(),
            )
        })?;

    log_info(&format!("🔑 [OAuth2] Code recebido: {}", mask_secret(&code, 10)));

    let request = TokenRequest::AuthorizationCode {
        code,
        redirect_uri,
        scope: COMPANY_FILE_SCOPE.to_string(),
    };

    let token = state
        .token_exchanger(credentials)
        .exchange(&request)
        .await
        .map_err(|e| match e {
            MyobError::TokenExchange { status, body } => {
                log_myob_api_error("authorization_code", Some(status), &body);
                AppError::Unauthorized(format!(
                    "Failed to exchange code for token: {} - {}",
                    status, body
                ))
            }
            other => {
                log_myob_api_error("authorization_code", other.upstream_status(), &other.to_string());
                other.into()
            }
        })?;

    log_info("✅ [OAuth2] Token obtido via authorization code");

    Ok(Json(json!({
        "success": true,
        "accessToken": token.access_token,
        "expiresIn": token.expires_in,
        "tokenType": token.token_type,
        "scope": token.scope,
    })))
}

/// GET|POST /myob/login
///
/// Client credentials: troca direta das credenciais do client por um token, sem redirect.
/// Erros do token endpoint são repassados com o status original.
pub async fn client_credentials_login(
    method: Method,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Value>> {
    log_request_received("/myob/login", method.as_str());

    let credentials = state.settings.myob.oauth_credentials().map_err(|missing| {
        log_missing_config("/myob/login", &missing.to_string());
        AppError::Config("Missing MYOB configuration".to_string())
    })?;

    let request = TokenRequest::ClientCredentials {
        scope: COMPANY_FILE_SCOPE.to_string(),
    };

    let token = state
        .token_exchanger(credentials)
        .exchange(&request)
        .await
        .map_err(|e| match e {
            MyobError::TokenExchange { status, body } => {
                log_myob_api_error("client_credentials", Some(status), &body);
                AppError::Upstream {
                    status,
                    message: format!("Token request failed: {}", body),
                }
            }
            other => {
                log_myob_api_error("client_credentials", other.upstream_status(), &other.to_string());
                other.into()
            }
        })?;

    log_info("✅ [OAuth2] Token obtido via client credentials");

    Ok(Json(json!({
        "success": true,
        "accessToken": token.access_token,
        "expiresIn": token.expires_in,
        "tokenType": token.token_type,
    })))
}
