// Biblioteca do middleware MYOB Items
// Expõe módulos para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use myob::{CompanyFile, ItemFetcher, OAuthCredentials, TokenExchanger};

// AppState é definido aqui para ser compartilhado.
// Sem estado mutável: nenhum token é guardado entre requisições.
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn token_exchanger(&self, credentials: OAuthCredentials) -> TokenExchanger {
        TokenExchanger::new(self.http_client.clone(), credentials)
    }

    pub fn item_fetcher(&self, company: CompanyFile) -> ItemFetcher {
        ItemFetcher::new(self.http_client.clone(), company)
    }
}
