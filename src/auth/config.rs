//! Configuração do redirect de autorização OAuth2

use myob::COMPANY_FILE_SCOPE;

use crate::config::{MissingSettings, MyobSettings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeConfig {
    pub client_id: String,
    /// URL de callback registrada no MYOB
    pub redirect_uri: String,
    pub base_url: String,
}

impl AuthorizeConfig {
    pub fn from_settings(settings: &MyobSettings) -> Result<Self, MissingSettings> {
        let [client_id, redirect_uri, base_url] = settings.require([
            ("MYOB_CLIENT_ID", &settings.client_id),
            ("MYOB_REDIRECT_URI", &settings.redirect_uri),
            ("MYOB_BASE_URL", &settings.base_url),
        ])?;

        Ok(Self {
            client_id,
            redirect_uri,
            base_url,
        })
    }

    /// Gerar URL de autorização do MYOB
    pub fn authorization_url(&self) -> String {
        format!(
            "{}/oauth/authorize?client_id={}&redirect_uri={}&scope={}&response_type=code",
            self.base_url.trim_end_matches('/'),
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(COMPANY_FILE_SCOPE)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url() {
        let config = AuthorizeConfig {
            client_id: "test_client_id".to_string(),
            redirect_uri: "https://example.com/myob/callback".to_string(),
            base_url: "https://secure.myob.com".to_string(),
        };

        assert_eq!(
            config.authorization_url(),
            "https://secure.myob.com/oauth/authorize?client_id=test_client_id\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fmyob%2Fcallback\
             &scope=CompanyFile&response_type=code"
        );
    }

    #[test]
    fn test_from_settings_reports_every_missing_value() {
        let err = AuthorizeConfig::from_settings(&MyobSettings {
            client_secret: Some("secret".to_string()),
            ..MyobSettings::default()
        })
        .unwrap_err();

        assert_eq!(
            err,
            MissingSettings(vec!["MYOB_CLIENT_ID", "MYOB_REDIRECT_URI", "MYOB_BASE_URL"])
        );
    }
}
