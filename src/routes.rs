//! Montagem do router Axum (usado pelo binário e pelos testes)

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::{client_credentials_login, handle_callback, start_authorization};
use crate::handlers::{dashboard, health_check, list_items, method_not_allowed, not_found, ready_check};
use crate::middleware::panic_response;
use crate::AppState;

fn json_405(router: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    router.fallback(method_not_allowed)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Dashboard + health checks
        .route("/", get(dashboard))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))

        // OAuth2 authorization code
        .route("/myob/auth", json_405(get(start_authorization)))
        .route("/myob/callback", json_405(get(handle_callback)))

        // OAuth2 client credentials
        .route(
            "/myob/login",
            json_405(get(client_credentials_login).post(client_credentials_login)),
        )

        // Item proxy
        .route("/myob/items", json_405(get(list_items)))

        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
