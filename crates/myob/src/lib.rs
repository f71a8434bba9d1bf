//! Cliente da API MYOB Advanced Business
//!
//! Cobre apenas o necessário para o middleware de inventário:
//!
//! - **Token Exchanger** (`token`): authorization code ou client credentials → access token,
//!   via POST form-encoded em `{base_url}/oauth/token` com Basic auth
//! - **Item Fetcher** (`items`): GET da Item collection de um company file com Bearer token,
//!   normalizando os três formatos de resposta conhecidos
//!
//! Nenhum token é armazenado: cada chamada faz a troca completa.
//!
//! # Exemplo
//!
//! ```rust,ignore
//! use myob::{CompanyFile, ItemFetcher, OAuthCredentials, TokenExchanger, TokenRequest};
//!
//! let http = reqwest::Client::new();
//! let exchanger = TokenExchanger::new(http.clone(), credentials);
//! let token = exchanger
//!     .exchange(&TokenRequest::ClientCredentials { scope: myob::COMPANY_FILE_SCOPE.into() })
//!     .await?;
//!
//! let fetcher = ItemFetcher::new(http, company);
//! let items = fetcher.fetch_items(token.bearer().unwrap_or_default()).await?;
//! ```

pub mod error;
pub mod items;
pub mod token;

pub use error::{MyobError, Result};
pub use items::{normalize_items, CompanyFile, Item, ItemFetcher, ItemsPayload};
pub use token::{basic_auth_header, OAuthCredentials, Token, TokenExchanger, TokenRequest};

/// Scope usado em todas as requisições ao MYOB
pub const COMPANY_FILE_SCOPE: &str = "CompanyFile";
