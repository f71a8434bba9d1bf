//! MYOB Items Middleware
//!
//! - Dashboard de itens em `/`
//! - OAuth2 authorization code: `/myob/auth` → MYOB → `/myob/callback`
//! - OAuth2 client credentials: `/myob/login`
//! - Proxy da Item collection: `/myob/items` (token novo a cada requisição)
//!
//! Sem estado compartilhado entre requisições: nenhum token é persistido.

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use myob_items_middleware::{config::Settings, routes, utils::logging::*, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if dotenv_loaded {
        tracing::info!("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Carregar configurações (uma única vez)
    let settings = Settings::new().context("Failed to load settings")?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    for (name, missing) in [
        ("authorize", myob_items_middleware::auth::AuthorizeConfig::from_settings(&settings.myob).err()),
        ("token", settings.myob.oauth_credentials().err()),
        ("company file", settings.myob.company_file().err()),
    ] {
        match missing {
            None => log_info(&format!("✅ MYOB {} configurado", name)),
            Some(missing) => log_warning(&format!("⚠️  MYOB {} incompleto ({})", name, missing)),
        }
    }

    let address = settings.bind_address();
    let app = routes::build_router(Arc::new(AppState::new(settings)));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    log_server_startup(&address);
    log_server_ready(&address);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error(&format!("Failed to install Ctrl+C handler: {}", e));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log_error(&format!("Failed to install SIGTERM handler: {}", e));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
