//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Browser origin allowed to call the API with credentials
    pub client_origin: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_origin = lookup("CLIENT_ORIGIN")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnv("CLIENT_ORIGIN"))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Self {
            client_origin,
            host,
            port,
            environment,
        })
    }

    /// Origins allowed by the CORS policy, in registration order
    pub fn allowed_origins(&self) -> Vec<String> {
        vec![self.client_origin.clone()]
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
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
    fn test_defaults_applied() {
        let config =
            Config::from_lookup(lookup_from(&[("CLIENT_ORIGIN", "http://localhost:3000")]))
                .unwrap();

        assert_eq!(config.client_origin, "http://localhost:3000");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
    }

    #[test]
    fn test_missing_client_origin_fails() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("CLIENT_ORIGIN")));
    }

    #[test]
    fn test_blank_client_origin_is_missing() {
        let err = Config::from_lookup(lookup_from(&[("CLIENT_ORIGIN", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("CLIENT_ORIGIN")));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("CLIENT_ORIGIN", "https://example.com"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("PORT")));
    }

    #[test]
    fn test_allowed_origins_is_singleton() {
        let config = Config::from_lookup(lookup_from(&[
            ("CLIENT_ORIGIN", " https://example.com "),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.allowed_origins(), vec!["https://example.com".to_string()]);
        assert!(config.is_production());
    }
}
