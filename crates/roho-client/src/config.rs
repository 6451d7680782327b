//! Client configuration.

use std::time::Duration;

use roho_core::ClientError;

pub const DEFAULT_API_URL: &str = "https://api.robinhood.com/";
pub const DEFAULT_CRYPTO_URL: &str = "https://nummus.robinhood.com/";
pub const DEFAULT_TOKEN_ENV: &str = "RH_TOKEN";

/// Connection settings for the brokerage API.
#[derive(Clone)]
pub struct ClientConfig {
    /// OAuth bearer token issued by a prior login.
    pub token: Option<String>,
    pub base_url: String,
    pub crypto_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("crypto_url", &self.crypto_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_API_URL.to_string(),
            crypto_url: DEFAULT_CRYPTO_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("roho/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create config with a bearer token and default endpoints.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Load the token from `RH_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_env_var(DEFAULT_TOKEN_ENV)
    }

    /// Load the token from the named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, ClientError> {
        let token = std::env::var(name)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration(format!("{name} must be defined")))?;
        Ok(Self::new(token))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = with_trailing_slash(base_url.into());
        self
    }

    pub fn with_crypto_url(mut self, crypto_url: impl Into<String>) -> Self {
        self.crypto_url = with_trailing_slash(crypto_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub(crate) fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.crypto_url, DEFAULT_CRYPTO_URL);
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_missing_env_token() {
        let err = ClientConfig::from_env_var("ROHO_TEST_TOKEN_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
