use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use signet_core::Identity;
use thiserror::Error;

#[derive(Clone)]
pub struct JwtConfig {
    pub signing_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn secret_bytes(&self) -> &[u8] {
        self.signing_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    /// Bad signature, malformed structure, or expiry - deliberately one
    /// variant, so callers can only react by re-authenticating.
    #[error("Invalid session token")]
    Invalid,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// A signed, time-bounded session token. Opaque to clients beyond its
/// signature validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Claims carried by a session token: the identity subset plus
/// issued-at and expiry timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The identity's stable id: a store record id (string form) for the
    /// credential strategy, a provider subject id for the OAuth strategy.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues, validates, and refreshes signed session tokens.
///
/// Holds no mutable state - only the signing configuration loaded at
/// process start. Tokens are independent, immutable values; issuing or
/// refreshing one never affects another in flight.
#[derive(Clone)]
pub struct JwtSessionService {
    config: JwtConfig,
}

impl JwtSessionService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Sign a token asserting the given identity, valid for the
    /// configured lifetime from now.
    pub fn issue(&self, identity: &Identity) -> Result<SessionToken, SessionTokenError> {
        let (iat, exp) = self.lifetime_bounds()?;

        let claims = SessionClaims {
            sub: identity.id().to_owned(),
            email: identity.email().as_str().to_owned(),
            name: identity.name().to_owned(),
            iat,
            exp,
        };

        self.sign(&claims)
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn decode(&self, token: &SessionToken) -> Result<SessionClaims, SessionTokenError> {
        decode::<SessionClaims>(
            token.as_str(),
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|error| {
            tracing::debug!(%error, "session token rejected");
            SessionTokenError::Invalid
        })
    }

    /// Re-sign still-valid claims with a fresh issued-at and an expiry
    /// extended to a full lifetime from now - always strictly past the
    /// old expiry. Subject and carried claims are preserved unchanged.
    pub fn refresh(&self, claims: &SessionClaims) -> Result<SessionToken, SessionTokenError> {
        let (iat, exp) = self.lifetime_bounds()?;

        let refreshed = SessionClaims {
            sub: claims.sub.clone(),
            email: claims.email.clone(),
            name: claims.name.clone(),
            iat: iat.max(claims.iat),
            // Timestamps have second granularity; a refresh inside the
            // issuing second would otherwise reproduce the old expiry.
            exp: exp.max(claims.exp + 1),
        };

        self.sign(&refreshed)
    }

    fn sign(&self, claims: &SessionClaims) -> Result<SessionToken, SessionTokenError> {
        encode(
            &jsonwebtoken::Header::default(),
            claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )
        .map(SessionToken::from)
        .map_err(|e| SessionTokenError::UnexpectedError(e.to_string()))
    }

    fn lifetime_bounds(&self) -> Result<(usize, usize), SessionTokenError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            SessionTokenError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(SessionTokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let iat: usize = now.timestamp().try_into().map_err(|_| {
            SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string())
        })?;
        let exp: usize = exp.try_into().map_err(|_| {
            SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string())
        })?;

        Ok((iat, exp))
    }
}
