//! Request signing
//!
//! Trello authenticates REST calls with `key` and `token` query parameters.

use crate::config::TrelloConfig;

use super::TrelloError;

/// Application key and user token
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application key
    pub key: String,
    /// User token
    pub token: String,
}

impl Credentials {
    /// Take the credentials from config; both must be present
    pub fn from_config(config: &TrelloConfig) -> Result<Self, TrelloError> {
        if !config.has_credentials() {
            return Err(TrelloError::MissingCredentials);
        }
        Ok(Self {
            key: config.api_key.clone(),
            token: config.token.clone(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Build a signed request URL for an API path such as `/boards/{id}/cards`
#[must_use]
pub fn signed_url(base_url: &str, path: &str, credentials: &Credentials) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!(
        "{}{path}{separator}key={}&token={}",
        base_url.trim_end_matches('/'),
        credentials.key,
        credentials.token
    )
}
