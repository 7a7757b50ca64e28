pub mod authentication;
pub mod config;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use authentication::session_authenticator::{
    AuthenticatedSession, SessionAuthError, SessionAuthenticator,
};
pub use self::config::settings::{AuthSettings, OAuthSettings, SettingsError};
pub use hashing::argon2_verifier::{Argon2Verifier, compute_password_hash};
pub use persistence::{
    in_memory_credential_store::InMemoryCredentialStore,
    postgres_credential_store::PostgresCredentialStore,
};
pub use tokens::jwt_session_service::{
    JwtConfig, JwtSessionService, SessionClaims, SessionToken, SessionTokenError,
};
