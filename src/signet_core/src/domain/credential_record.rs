use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    email::EmailAddress, password::StoredPasswordHash, provider_profile::ProviderProfile,
};

/// A user record as read from the credential store.
///
/// The store owns these records; this core only ever reads them. The
/// password hash is absent for accounts that were created through the
/// OAuth strategy and never set a password.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    id: Uuid,
    email: EmailAddress,
    password_hash: Option<StoredPasswordHash>,
    name: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(
        id: Uuid,
        email: EmailAddress,
        password_hash: Option<StoredPasswordHash>,
        name: String,
        image: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
            image,
            created_at,
        }
    }

    /// The record an external registration collaborator would persist the
    /// first time a provider profile is seen: no password hash, creation
    /// timestamp stamped now.
    pub fn first_seen(profile: &ProviderProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: profile.email.clone(),
            password_hash: None,
            name: profile.display_name(),
            image: profile.picture_url.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> Option<&StoredPasswordHash> {
        self.password_hash.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
