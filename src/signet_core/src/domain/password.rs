use secrecy::Secret;
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters")]
    TooShort,
}

/// A plaintext password candidate submitted for a login attempt.
///
/// Wrapped in `Secret` so it never shows up in logs or debug output.
/// The plaintext is only exposed at the hashing boundary.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        use secrecy::ExposeSecret;

        if value.expose_secret().len() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(value))
    }
}

/// A salted password hash in PHC string format, exactly as stored in the
/// credential store. Absent for accounts created through the OAuth
/// strategy that never set a password.
#[derive(Debug, Clone)]
pub struct StoredPasswordHash(Secret<String>);

impl StoredPasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }

    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
