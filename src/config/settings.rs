use config::{Config, ConfigError, File};
use myob::{CompanyFile, OAuthCredentials};
use serde::{Deserialize, Serialize};

/// Variáveis de ambiente que sobrescrevem `myob.*`
const MYOB_ENV_OVERRIDES: [(&str, &str); 6] = [
    ("MYOB_CLIENT_ID", "myob.client_id"),
    ("MYOB_SECRET", "myob.client_secret"),
    ("MYOB_BASE_URL", "myob.base_url"),
    ("MYOB_REDIRECT_URI", "myob.redirect_uri"),
    ("MYOB_API_ENDPOINT", "myob.api_endpoint"),
    ("MYOB_COMPANY_ID", "myob.company_id"),
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub myob: MyobSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Credenciais MYOB. Todas opcionais no carregamento: a ausência é reportada
/// por requisição (400), não no startup.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct MyobSettings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub base_url: Option<String>,
    pub redirect_uri: Option<String>,
    pub api_endpoint: Option<String>,
    pub company_id: Option<String>,
}

/// Configurações obrigatórias ausentes (nomes das variáveis de ambiente)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing {}", .0.join(", "))]
pub struct MissingSettings(pub Vec<&'static str>);

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        for (var, key) in MYOB_ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        // Cloud Run / Heroku style
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl MyobSettings {
    /// Retorna os valores pedidos, na mesma ordem, ou a lista dos que faltam
    pub fn require<const N: usize>(
        &self,
        fields: [(&'static str, &Option<String>); N],
    ) -> Result<[String; N], MissingSettings> {
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| present(value).is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(MissingSettings(missing));
        }

        Ok(fields.map(|(_, value)| present(value).unwrap_or_default().to_string()))
    }

    /// client id + secret + base url (token endpoint)
    pub fn oauth_credentials(&self) -> Result<OAuthCredentials, MissingSettings> {
        let [client_id, client_secret, base_url] = self.require([
            ("MYOB_CLIENT_ID", &self.client_id),
            ("MYOB_SECRET", &self.client_secret),
            ("MYOB_BASE_URL", &self.base_url),
        ])?;

        Ok(OAuthCredentials {
            client_id,
            client_secret,
            base_url,
        })
    }

    /// Credenciais do token endpoint + redirect URI (authorization code grant)
    pub fn code_exchange_credentials(&self) -> Result<(OAuthCredentials, String), MissingSettings> {
        let [client_id, client_secret, base_url, redirect_uri] = self.require([
            ("MYOB_CLIENT_ID", &self.client_id),
            ("MYOB_SECRET", &self.client_secret),
            ("MYOB_BASE_URL", &self.base_url),
            ("MYOB_REDIRECT_URI", &self.redirect_uri),
        ])?;

        Ok((
            OAuthCredentials {
                client_id,
                client_secret,
                base_url,
            },
            redirect_uri,
        ))
    }

    pub fn company_file(&self) -> Result<CompanyFile, MissingSettings> {
        let [api_endpoint, company_id] = self.require([
            ("MYOB_API_ENDPOINT", &self.api_endpoint),
            ("MYOB_COMPANY_ID", &self.company_id),
        ])?;

        Ok(CompanyFile {
            api_endpoint,
            company_id,
        })
    }
}
