// Handlers HTTP do middleware
pub mod dashboard;
pub mod fallback;
pub mod health;
pub mod items;

pub use dashboard::*;
pub use fallback::*;
pub use health::*;
pub use items::*;

// OAuth2 handlers estão em src/auth/handlers.rs (módulo separado)
