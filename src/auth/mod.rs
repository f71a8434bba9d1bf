//! # MYOB OAuth2 Module
//!
//! Endpoints dos dois fluxos OAuth2 suportados pelo MYOB:
//!
//! ## Authorization code (3 passos, sem estado entre eles)
//! 1. `GET /myob/auth` redireciona o usuário para `{base_url}/oauth/authorize`
//! 2. O MYOB redireciona de volta com `code` (ou `error`)
//! 3. `GET /myob/callback` troca o `code` por um access token
//!
//! ## Client credentials (1 passo)
//! - `GET|POST /myob/login` troca as credenciais do client por um access token
//!
//! ## Estrutura:
//! - `config.rs`: URL de autorização
//! - `handlers.rs`: Handlers HTTP (auth, callback, login)

pub mod config;
pub mod handlers;

pub use config::AuthorizeConfig;
pub use handlers::{client_credentials_login, handle_callback, start_authorization, CallbackParams};
