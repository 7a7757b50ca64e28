use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use thiserror::Error;

use crate::config::constants::{DEFAULT_TOKEN_TTL_SECONDS, keys};

#[derive(Debug, Error)]
pub enum SettingsError {
    /// Fatal at startup. There is no unsigned or default-secret fallback.
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingSigningSecret,
    #[error("OAUTH_CLIENT_ID and OAUTH_CLIENT_SECRET must be set together")]
    IncompleteOAuthClient,
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Client credentials for the external OAuth collaborator. Opaque here -
/// the provider handshake lives outside this core.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

/// Everything the authentication core consumes from the environment.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub signing_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
    pub oauth: Option<OAuthSettings>,
}

impl AuthSettings {
    /// Load settings from the process environment (and a `.env` file if
    /// one is present).
    pub fn load() -> Result<Self, SettingsError> {
        let _ = dotenvy::dotenv();
        Self::from_environment(Environment::default())
    }

    /// Load from an explicit source. Tests inject variable maps here
    /// instead of mutating the process environment.
    pub fn from_environment(source: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;

        let signing_secret = match config.get_string(keys::JWT_SECRET) {
            Ok(secret) if !secret.is_empty() => Secret::from(secret),
            Ok(_) | Err(ConfigError::NotFound(_)) => {
                return Err(SettingsError::MissingSigningSecret);
            }
            Err(e) => return Err(SettingsError::Invalid(e.to_string())),
        };

        let token_ttl_in_seconds = match config.get_int(keys::SESSION_TOKEN_TTL) {
            Ok(ttl) if ttl > 0 => ttl,
            Ok(ttl) => {
                return Err(SettingsError::Invalid(format!(
                    "session token ttl must be positive, got {ttl}"
                )));
            }
            Err(ConfigError::NotFound(_)) => DEFAULT_TOKEN_TTL_SECONDS,
            Err(e) => return Err(SettingsError::Invalid(e.to_string())),
        };

        let client_id = config.get_string(keys::OAUTH_CLIENT_ID).ok();
        let client_secret = config.get_string(keys::OAUTH_CLIENT_SECRET).ok();
        let oauth = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(OAuthSettings {
                client_id,
                client_secret: Secret::from(client_secret),
            }),
            (None, None) => None,
            _ => return Err(SettingsError::IncompleteOAuthClient),
        };

        Ok(Self {
            signing_secret,
            token_ttl_in_seconds,
            oauth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(map))
    }

    #[test]
    fn test_missing_signing_secret_is_fatal() {
        let result = AuthSettings::from_environment(environment(&[]));
        assert!(matches!(result, Err(SettingsError::MissingSigningSecret)));
    }

    #[test]
    fn test_empty_signing_secret_is_fatal() {
        let result = AuthSettings::from_environment(environment(&[("JWT_SECRET", "")]));
        assert!(matches!(result, Err(SettingsError::MissingSigningSecret)));
    }

    #[test]
    fn test_defaults_applied_with_secret_only() {
        let settings =
            AuthSettings::from_environment(environment(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(settings.signing_secret.expose_secret(), "s3cret");
        assert_eq!(settings.token_ttl_in_seconds, DEFAULT_TOKEN_TTL_SECONDS);
        assert!(settings.oauth.is_none());
    }

    #[test]
    fn test_explicit_ttl_overrides_default() {
        let settings = AuthSettings::from_environment(environment(&[
            ("JWT_SECRET", "s3cret"),
            ("SESSION_TOKEN_TTL_SECONDS", "600"),
        ]))
        .unwrap();
        assert_eq!(settings.token_ttl_in_seconds, 600);
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let result = AuthSettings::from_environment(environment(&[
            ("JWT_SECRET", "s3cret"),
            ("SESSION_TOKEN_TTL_SECONDS", "0"),
        ]));
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_oauth_client_loaded_when_both_set() {
        let settings = AuthSettings::from_environment(environment(&[
            ("JWT_SECRET", "s3cret"),
            ("OAUTH_CLIENT_ID", "client-1"),
            ("OAUTH_CLIENT_SECRET", "hush"),
        ]))
        .unwrap();

        let oauth = settings.oauth.unwrap();
        assert_eq!(oauth.client_id, "client-1");
        assert_eq!(oauth.client_secret.expose_secret(), "hush");
    }

    #[test]
    fn test_half_configured_oauth_client_rejected() {
        let result = AuthSettings::from_environment(environment(&[
            ("JWT_SECRET", "s3cret"),
            ("OAUTH_CLIENT_ID", "client-1"),
        ]));
        assert!(matches!(result, Err(SettingsError::IncompleteOAuthClient)));
    }
}
