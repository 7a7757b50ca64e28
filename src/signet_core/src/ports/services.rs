use async_trait::async_trait;

use crate::domain::password::{Password, StoredPasswordHash};

/// Compares a plaintext password candidate against a stored salted hash.
///
/// Implementations must use a deliberately slow, timing-safe comparison
/// primitive and must never compare raw bytes. A `None` stored hash (an
/// OAuth-only account with no password set) returns `false` without
/// attempting a comparison; callers cannot distinguish it from a
/// mismatch.
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    async fn verify(&self, candidate: &Password, stored: Option<&StoredPasswordHash>) -> bool;
}

#[async_trait]
impl<T: PasswordVerifier + ?Sized> PasswordVerifier for &T {
    async fn verify(&self, candidate: &Password, stored: Option<&StoredPasswordHash>) -> bool {
        (**self).verify(candidate, stored).await
    }
}
