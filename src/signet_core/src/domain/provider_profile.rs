use serde::Deserialize;

use crate::domain::email::EmailAddress;

/// A user profile handed over by the external OAuth collaborator after it
/// has completed and cryptographically verified the provider handshake.
///
/// Field names follow the provider's wire format (OpenID Connect claim
/// names), so the payload the collaborator receives deserializes directly.
/// Nothing in this core re-verifies the profile - the trust boundary is
/// the provider integration itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderProfile {
    /// The provider's stable subject identifier for this user.
    #[serde(rename = "sub")]
    pub subject_id: String,
    pub email: EmailAddress,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default, rename = "name")]
    pub full_name: Option<String>,
    #[serde(default, rename = "picture")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl ProviderProfile {
    /// Display name preference: given name, then full name, then the
    /// email local part.
    pub fn display_name(&self) -> String {
        self.given_name
            .clone()
            .or_else(|| self.full_name.clone())
            .unwrap_or_else(|| self.email.local_part().to_owned())
    }
}
