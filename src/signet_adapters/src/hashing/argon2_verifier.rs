use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier as _, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use signet_core::{Password, PasswordVerifier, StoredPasswordHash};

/// Argon2id-backed implementation of the password verifier port.
///
/// Comparison runs on a blocking thread; the parameters are deliberately
/// expensive so a candidate cannot be brute-forced at interactive rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

fn argon2_hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait]
impl PasswordVerifier for Argon2Verifier {
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, candidate: &Password, stored: Option<&StoredPasswordHash>) -> bool {
        let Some(stored) = stored else {
            // Loggable, but callers see the same outcome as a mismatch.
            tracing::warn!("credential login attempted on passwordless account");
            return false;
        };

        let stored = stored.clone();
        let candidate = candidate.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let outcome = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash: PasswordHash<'_> =
                    PasswordHash::new(stored.as_ref().expose_secret())
                        .map_err(|e| e.to_string())?;

                argon2_hasher()?
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_password_hash,
                    )
                    .map_err(|e| e.to_string())
            })
        })
        .await;

        match outcome {
            Ok(Ok(())) => true,
            Ok(Err(reason)) => {
                tracing::debug!(%reason, "password verification failed");
                false
            }
            Err(join_error) => {
                tracing::error!(%join_error, "password verification task panicked");
                false
            }
        }
    }
}

/// Hash a password for storage. Used by external provisioning
/// collaborators and by test fixtures; the login path never hashes, it
/// only verifies.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<StoredPasswordHash, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            argon2_hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| StoredPasswordHash::new(Secret::from(h.to_string())))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
