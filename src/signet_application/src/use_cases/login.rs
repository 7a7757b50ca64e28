use std::time::Duration;

use signet_core::{
    CredentialStore, CredentialStoreError, EmailAddress, Identity, Password, PasswordVerifier,
    ProviderProfile,
};

/// One authentication attempt, entering the state machine through one of
/// its two strategies.
#[derive(Debug)]
pub enum AuthAttempt {
    /// Email and password, checked against the credential store.
    Credentials {
        email: EmailAddress,
        password: Password,
    },
    /// A provider profile already verified by the external OAuth
    /// collaborator. Accepted without further checks.
    Provider(ProviderProfile),
}

impl AuthAttempt {
    fn strategy(&self) -> &'static str {
        match self {
            AuthAttempt::Credentials { .. } => "credentials",
            AuthAttempt::Provider(_) => "provider",
        }
    }
}

/// Why a credentials attempt was rejected. Logged for operators, never
/// surfaced to the caller - all three causes share one uniform message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionCause {
    UnknownEmail,
    PasswordlessAccount,
    WrongPassword,
}

/// Error types for the login use case.
///
/// `Rejected` deliberately renders the same message for every cause so a
/// caller (or an attacker) cannot tell whether the email exists, the
/// account is passwordless, or the password was wrong. `Unavailable` and
/// `TimedOut` are transient signals the caller may retry.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    Rejected(RejectionCause),
    #[error("Authentication is temporarily unavailable, please try again")]
    Unavailable(#[source] CredentialStoreError),
    #[error("Authentication is temporarily unavailable, please try again")]
    TimedOut,
}

impl AuthError {
    /// Whether the caller may reasonably retry the same attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Unavailable(_) | AuthError::TimedOut)
    }
}

/// Login use case - drives one authentication attempt from entry to a
/// terminal state.
///
/// Credentials path: store lookup, then hash comparison, then identity
/// normalization, strictly in that order. Provider path: the profile is
/// trusted as-is and normalized directly. No retries happen here; retry
/// policy belongs to the caller.
pub struct LoginUseCase<S, V>
where
    S: CredentialStore,
    V: PasswordVerifier,
{
    credential_store: S,
    password_verifier: V,
    attempt_timeout: Option<Duration>,
}

impl<S, V> LoginUseCase<S, V>
where
    S: CredentialStore,
    V: PasswordVerifier,
{
    pub fn new(credential_store: S, password_verifier: V) -> Self {
        Self {
            credential_store,
            password_verifier,
            attempt_timeout: None,
        }
    }

    /// Bound the whole attempt by a caller-supplied time budget. If it
    /// elapses mid-flight the attempt resolves to the transient error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The canonical `Identity` on acceptance, or an `AuthError` terminal
    /// state.
    #[tracing::instrument(
        name = "LoginUseCase::execute",
        skip_all,
        fields(strategy = attempt.strategy())
    )]
    pub async fn execute(&self, attempt: AuthAttempt) -> Result<Identity, AuthError> {
        match self.attempt_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.run(attempt)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!("login attempt exceeded its time budget");
                    Err(AuthError::TimedOut)
                }
            },
            None => self.run(attempt).await,
        }
    }

    async fn run(&self, attempt: AuthAttempt) -> Result<Identity, AuthError> {
        match attempt {
            AuthAttempt::Credentials { email, password } => {
                self.authenticate_credentials(email, password).await
            }
            AuthAttempt::Provider(profile) => {
                // The provider integration already verified this profile.
                Ok(Identity::from_provider_profile(&profile))
            }
        }
    }

    async fn authenticate_credentials(
        &self,
        email: EmailAddress,
        password: Password,
    ) -> Result<Identity, AuthError> {
        let record = self
            .credential_store
            .find_by_email(&email)
            .await
            .map_err(AuthError::Unavailable)?;

        let Some(record) = record else {
            return Err(self.reject(RejectionCause::UnknownEmail));
        };

        let Some(stored_hash) = record.password_hash() else {
            return Err(self.reject(RejectionCause::PasswordlessAccount));
        };

        if !self
            .password_verifier
            .verify(&password, Some(stored_hash))
            .await
        {
            return Err(self.reject(RejectionCause::WrongPassword));
        }

        Ok(Identity::from_credential(&record))
    }

    fn reject(&self, cause: RejectionCause) -> AuthError {
        // Operators see the cause; the caller only ever sees the uniform
        // rejection message.
        tracing::debug!(?cause, "login attempt rejected");
        AuthError::Rejected(cause)
    }
}
