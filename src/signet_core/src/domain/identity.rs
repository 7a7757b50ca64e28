use crate::domain::{
    credential_record::CredentialRecord, email::EmailAddress, provider_profile::ProviderProfile,
};

/// Canonical, strategy-agnostic representation of an authenticated user.
///
/// Both authentication strategies converge on this shape before a session
/// token is issued. The `id` is the store record's identifier (string
/// form) for the credential strategy and the provider's subject
/// identifier for the OAuth strategy - the two namespaces are never
/// merged implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: String,
    email: EmailAddress,
    name: String,
    image: Option<String>,
}

impl Identity {
    pub fn from_credential(record: &CredentialRecord) -> Self {
        Self {
            id: record.id().to_string(),
            email: record.email().clone(),
            name: record.name().to_owned(),
            image: record.image().map(str::to_owned),
        }
    }

    pub fn from_provider_profile(profile: &ProviderProfile) -> Self {
        Self {
            id: profile.subject_id.clone(),
            email: profile.email.clone(),
            name: profile.display_name(),
            image: profile.picture_url.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
