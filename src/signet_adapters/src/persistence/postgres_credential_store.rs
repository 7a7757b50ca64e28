use chrono::{DateTime, Utc};
use secrecy::Secret;
use signet_core::{
    CredentialRecord, CredentialStore, CredentialStoreError, EmailAddress, StoredPasswordHash,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// PostgreSQL-backed credential store.
///
/// Expects a `users` table with columns `id uuid`, `email text` (unique,
/// stored lower-cased), `password_hash text null`, `name text`,
/// `image text null`, `created_at timestamptz`. Uniqueness of `email` is
/// the store's responsibility; this adapter only reads.
pub struct PostgresCredentialStore {
    pool: sqlx::PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresCredentialStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    email: String,
    password_hash: Option<String>,
    name: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CredentialRow> for CredentialRecord {
    type Error = CredentialStoreError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        // A stored email that no longer parses is a data fault, not a
        // failed login.
        let email = EmailAddress::try_from(row.email)
            .map_err(|e| CredentialStoreError::Unavailable(e.to_string()))?;

        Ok(CredentialRecord::new(
            row.id,
            email,
            row.password_hash
                .map(|hash| StoredPasswordHash::new(Secret::from(hash))),
            row.name,
            row.image,
            row.created_at,
        ))
    }
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Looking up credential record in PostgreSQL", skip_all)]
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
                SELECT id, email, password_hash, name, image, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unavailable(e.to_string()))?;

        row.map(CredentialRecord::try_from).transpose()
    }
}
