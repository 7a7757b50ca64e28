pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credential_record::CredentialRecord,
    email::{EmailAddress, EmailError},
    identity::Identity,
    password::{Password, PasswordError, StoredPasswordHash},
    provider_profile::ProviderProfile,
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError},
    services::PasswordVerifier,
};
