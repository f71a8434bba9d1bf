use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_myob_api_error(operation: &str, status: Option<u16>, error: &str) {
    error!("MYOB API error: {} - Status: {:?} - Error: {}", operation, status, error);
}

pub fn log_missing_config(endpoint: &str, missing: &str) {
    warn!("⚠️ [{}] Configuração MYOB incompleta: {}", endpoint, missing);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(address: &str) {
    info!("🚀 MYOB items middleware server starting on {}", address);
}

pub fn log_server_ready(address: &str) {
    info!("✅ Server ready and listening on http://{}", address);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
