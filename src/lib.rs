//! # Signet - Authentication & Session-Issuance Core
//!
//! This is a facade crate that re-exports all public APIs from the
//! authentication core components. Two authentication strategies
//! (stored credentials and a pre-verified OAuth provider profile)
//! converge on one canonical `Identity`, which a stateless JWT session
//! service turns into a signed, time-bounded token.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! signet = { path = "../signet" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `EmailAddress`, `Password`, `Identity`, etc.
//! - **Ports**: `CredentialStore`, `PasswordVerifier`
//! - **Use cases**: `LoginUseCase` - the authentication state machine
//! - **Adapters**: `Argon2Verifier`, `JwtSessionService`,
//!   `InMemoryCredentialStore`, `PostgresCredentialStore`
//! - **Composition root**: `SessionAuthenticator`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signet_core::*;
}

// Re-export most commonly used core types at the root level
pub use signet_core::{
    CredentialRecord, EmailAddress, EmailError, Identity, Password, PasswordError,
    ProviderProfile, StoredPasswordHash,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use signet_core::{CredentialStore, CredentialStoreError, PasswordVerifier};
}

pub use signet_core::{CredentialStore, CredentialStoreError, PasswordVerifier};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use signet_application::*;
}

// Re-export use cases at root level
pub use signet_application::{AuthAttempt, AuthError, LoginUseCase, RejectionCause};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use signet_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use signet_adapters::hashing::*;
    }

    /// Session token service
    pub mod tokens {
        pub use signet_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use signet_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use signet_adapters::{
    Argon2Verifier, AuthSettings, AuthenticatedSession, InMemoryCredentialStore, JwtConfig,
    JwtSessionService, OAuthSettings, PostgresCredentialStore, SessionAuthError,
    SessionAuthenticator, SessionClaims, SessionToken, SessionTokenError, SettingsError,
    compute_password_hash,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
