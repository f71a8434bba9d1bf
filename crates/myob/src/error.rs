//! Tipos de erro para o crate myob

use thiserror::Error;

/// Erros do cliente MYOB
#[derive(Debug, Error)]
pub enum MyobError {
    /// Credencial obrigatória ausente (client id, secret, base url...)
    #[error("Missing MYOB configuration: {0}")]
    Config(String),

    /// Token endpoint respondeu com status não-2xx
    #[error("Token request failed: {body}")]
    TokenExchange { status: u16, body: String },

    /// Endpoint de Item respondeu com status não-2xx
    #[error("Items request failed: {status}")]
    ItemFetch { status: u16, body: String },

    /// Falha de rede / transporte
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Resposta 2xx cujo corpo não é JSON válido
    #[error("Invalid MYOB response: {0}")]
    InvalidResponse(String),
}

impl MyobError {
    /// Status HTTP devolvido pelo MYOB, quando a falha veio do upstream
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            MyobError::TokenExchange { status, .. } | MyobError::ItemFetch { status, .. } => {
                Some(*status)
            }
            MyobError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, MyobError>;
