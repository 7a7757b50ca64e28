pub mod credential_record;
pub mod email;
pub mod identity;
pub mod password;
pub mod provider_profile;
