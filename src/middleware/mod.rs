//! Middleware layer para o Axum router
//!
//! - Captura de panics com resposta JSON válida

pub mod panic_handler;

pub use panic_handler::panic_response;
