use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credential_record::CredentialRecord, email::EmailAddress};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unavailable(_), Self::Unavailable(_)) => true,
        }
    }
}

/// Read-only lookup contract against the persistent user-record store.
///
/// `Ok(None)` is the legitimate "no such user" outcome and is not an
/// error; `Err(Unavailable)` is a transport or storage fault that the
/// caller may retry.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a record by its canonical (lower-cased) email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        (**self).find_by_email(email).await
    }
}
