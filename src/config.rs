//! Client configuration

use crate::{Result, TapsilatError};
use std::time::Duration;
use url::Url;

/// Default Tapsilat API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://panel.tapsilat.dev/api/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "TAPSILAT_TOKEN";
/// Environment variable overriding the API endpoint
pub const ENV_ENDPOINT: &str = "TAPSILAT_ENDPOINT";
/// Environment variable overriding the timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "TAPSILAT_TIMEOUT_SECS";

/// Connection settings for [`TapsilatClient`](crate::TapsilatClient)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub endpoint: String,
    /// Bearer token sent in the `Authorization` header
    pub token: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the default endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from `TAPSILAT_TOKEN`, `TAPSILAT_ENDPOINT` and
    /// `TAPSILAT_TIMEOUT_SECS`. Only the token is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TapsilatError::config(format!("{} environment variable is required", ENV_TOKEN))
            })?;

        let mut config = Self::new(token);

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.is_empty()) {
            config = config.with_endpoint(endpoint);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|t| !t.is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                TapsilatError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(TapsilatError::config("Endpoint cannot be empty"));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| TapsilatError::config(format!("Invalid endpoint URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(TapsilatError::config(
                "Endpoint must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(TapsilatError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Endpoint without a trailing slash, ready for path concatenation
    pub(crate) fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("test_token");
        assert_eq!(config.token, "test_token");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_endpoint_and_timeout() {
        let config = ClientConfig::new("custom_token")
            .with_endpoint("https://custom.endpoint.com/api/v1/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "https://custom.endpoint.com/api/v1/");
        assert_eq!(config.base_url(), "https://custom.endpoint.com/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        let empty = ClientConfig::new("t").with_endpoint("");
        assert!(empty.validate().unwrap_err().to_string().contains("cannot be empty"));

        let garbage = ClientConfig::new("t").with_endpoint("not a url");
        assert!(garbage.validate().unwrap_err().to_string().contains("Invalid endpoint URL"));

        let ftp = ClientConfig::new("t").with_endpoint("ftp://example.com");
        assert!(ftp.validate().unwrap_err().to_string().contains("http:// or https://"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig::new("t").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("TAPSILAT_TOKEN environment variable is required"));

        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_TOKEN, "")])).unwrap_err();
        assert!(err.to_string().contains("TAPSILAT_TOKEN"));
    }

    #[test]
    fn test_from_lookup_with_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_TOKEN, "env_token"),
            (ENV_ENDPOINT, "http://localhost:8080/api/v1"),
            (ENV_TIMEOUT_SECS, "12"),
        ]))
        .unwrap();

        assert_eq!(config.token, "env_token");
        assert_eq!(config.endpoint, "http://localhost:8080/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (ENV_TOKEN, "env_token"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("TAPSILAT_TIMEOUT_SECS"));
    }
}
