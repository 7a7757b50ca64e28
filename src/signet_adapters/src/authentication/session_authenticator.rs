use std::time::Duration;

use signet_application::{AuthAttempt, AuthError, LoginUseCase};
use signet_core::{CredentialStore, Identity, PasswordVerifier};
use thiserror::Error;

use crate::config::settings::AuthSettings;
use crate::tokens::jwt_session_service::{
    JwtConfig, JwtSessionService, SessionClaims, SessionToken, SessionTokenError,
};

#[derive(Debug, Error)]
pub enum SessionAuthError {
    #[error("{0}")]
    AuthError(#[from] AuthError),
    #[error("{0}")]
    TokenError(#[from] SessionTokenError),
}

/// A successful authentication: the canonical identity plus the signed
/// session token asserting it.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: SessionToken,
    pub identity: Identity,
}

/// Composition root for the authentication core: runs the login use case
/// and hands accepted identities to the session token service.
///
/// Stateless between calls - many attempts may run concurrently against
/// one authenticator.
pub struct SessionAuthenticator<S, V> {
    credential_store: S,
    password_verifier: V,
    tokens: JwtSessionService,
    attempt_timeout: Option<Duration>,
}

impl<S, V> SessionAuthenticator<S, V>
where
    S: CredentialStore,
    V: PasswordVerifier,
{
    pub fn new(credential_store: S, password_verifier: V, tokens: JwtSessionService) -> Self {
        Self {
            credential_store,
            password_verifier,
            tokens,
            attempt_timeout: None,
        }
    }

    /// Build the token service from loaded settings. Settings loading has
    /// already refused to proceed without a signing secret.
    pub fn from_settings(credential_store: S, password_verifier: V, settings: &AuthSettings) -> Self {
        let tokens = JwtSessionService::new(JwtConfig {
            signing_secret: settings.signing_secret.clone(),
            token_ttl_in_seconds: settings.token_ttl_in_seconds,
        });
        Self::new(credential_store, password_verifier, tokens)
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    /// Drive one authentication attempt to a terminal state and, on
    /// acceptance, issue a session token for the identity.
    #[tracing::instrument(name = "SessionAuthenticator::login", skip_all)]
    pub async fn login(
        &self,
        attempt: AuthAttempt,
    ) -> Result<AuthenticatedSession, SessionAuthError> {
        let mut use_case = LoginUseCase::new(&self.credential_store, &self.password_verifier);
        if let Some(timeout) = self.attempt_timeout {
            use_case = use_case.with_timeout(timeout);
        }

        let identity = use_case.execute(attempt).await?;
        let token = self.tokens.issue(&identity)?;

        Ok(AuthenticatedSession { token, identity })
    }

    /// Validate a token presented on a subsequent request.
    pub fn verify_session(&self, token: &SessionToken) -> Result<SessionClaims, SessionAuthError> {
        Ok(self.tokens.decode(token)?)
    }

    /// Validate a token and re-issue it with a fresh lifetime. An invalid
    /// or expired token forces re-authentication instead.
    pub fn refresh_session(&self, token: &SessionToken) -> Result<SessionToken, SessionAuthError> {
        let claims = self.tokens.decode(token)?;
        Ok(self.tokens.refresh(&claims)?)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use secrecy::{ExposeSecret, Secret};
    use signet_core::{CredentialRecord, EmailAddress, Password, StoredPasswordHash};
    use uuid::Uuid;

    use crate::persistence::in_memory_credential_store::InMemoryCredentialStore;

    use super::*;

    // Plaintext comparison keeps these tests fast; the argon2 adapter is
    // covered separately.
    #[derive(Clone)]
    struct PlaintextVerifier;

    #[async_trait]
    impl PasswordVerifier for PlaintextVerifier {
        async fn verify(
            &self,
            candidate: &Password,
            stored: Option<&StoredPasswordHash>,
        ) -> bool {
            stored.is_some_and(|stored| {
                candidate.as_ref().expose_secret() == stored.as_ref().expose_secret()
            })
        }
    }

    fn authenticator(
        store: InMemoryCredentialStore,
    ) -> SessionAuthenticator<InMemoryCredentialStore, PlaintextVerifier> {
        let tokens = JwtSessionService::new(JwtConfig {
            signing_secret: Secret::from("secret".to_owned()),
            token_ttl_in_seconds: 600,
        });
        SessionAuthenticator::new(store, PlaintextVerifier, tokens)
    }

    fn credentials(email: &str, password: &str) -> AuthAttempt {
        AuthAttempt::Credentials {
            email: EmailAddress::try_from(email).unwrap(),
            password: Password::try_from(Secret::from(password.to_string())).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_identity() {
        let store = InMemoryCredentialStore::new();
        let id = Uuid::new_v4();
        store
            .insert(CredentialRecord::new(
                id,
                EmailAddress::try_from("a@x.com").unwrap(),
                Some(StoredPasswordHash::new(Secret::from(
                    "secret-password".to_string(),
                ))),
                "Alex".to_string(),
                None,
                Utc::now(),
            ))
            .await;
        let authenticator = authenticator(store);

        let session = authenticator
            .login(credentials("a@x.com", "secret-password"))
            .await
            .unwrap();

        assert_eq!(session.identity.id(), id.to_string());
        let claims = authenticator.verify_session(&session.token).unwrap();
        assert_eq!(claims.sub, session.identity.id());
    }

    #[tokio::test]
    async fn test_rejected_login_issues_no_token() {
        let authenticator = authenticator(InMemoryCredentialStore::new());

        let error = authenticator
            .login(credentials("nobody@x.com", "secret-password"))
            .await
            .unwrap_err();
        assert!(matches!(error, SessionAuthError::AuthError(_)));
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_refresh_preserves_subject() {
        let store = InMemoryCredentialStore::new();
        store
            .insert(CredentialRecord::new(
                Uuid::new_v4(),
                EmailAddress::try_from("a@x.com").unwrap(),
                Some(StoredPasswordHash::new(Secret::from(
                    "secret-password".to_string(),
                ))),
                "Alex".to_string(),
                None,
                Utc::now(),
            ))
            .await;
        let authenticator = authenticator(store);

        let session = authenticator
            .login(credentials("a@x.com", "secret-password"))
            .await
            .unwrap();
        let refreshed = authenticator.refresh_session(&session.token).unwrap();

        let claims = authenticator.verify_session(&refreshed).unwrap();
        assert_eq!(claims.sub, session.identity.id());
    }

    #[tokio::test]
    async fn test_from_settings_wires_token_service() {
        let vars: std::collections::HashMap<String, String> = [
            ("JWT_SECRET".to_string(), "s3cret".to_string()),
            ("SESSION_TOKEN_TTL_SECONDS".to_string(), "600".to_string()),
        ]
        .into_iter()
        .collect();
        let settings =
            AuthSettings::from_environment(config::Environment::default().source(Some(vars)))
                .unwrap();

        let authenticator = SessionAuthenticator::from_settings(
            InMemoryCredentialStore::new(),
            PlaintextVerifier,
            &settings,
        );

        let payload = r#"{ "sub": "g-123", "email": "c@x.com" }"#;
        let profile: signet_core::ProviderProfile = serde_json::from_str(payload).unwrap();
        let session = authenticator
            .login(AuthAttempt::Provider(profile))
            .await
            .unwrap();

        let claims = authenticator.verify_session(&session.token).unwrap();
        assert_eq!(claims.sub, "g-123");
    }

    #[tokio::test]
    async fn test_refresh_of_garbage_token_forces_reauthentication() {
        let authenticator = authenticator(InMemoryCredentialStore::new());

        let result = authenticator.refresh_session(&SessionToken::from("garbage".to_owned()));
        assert!(matches!(
            result,
            Err(SessionAuthError::TokenError(SessionTokenError::Invalid))
        ));
    }
}
