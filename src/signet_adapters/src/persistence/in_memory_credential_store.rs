use std::collections::HashMap;
use std::sync::Arc;

use signet_core::{CredentialRecord, CredentialStore, CredentialStoreError, EmailAddress};
use tokio::sync::RwLock;

/// In-memory credential store for tests and local development.
///
/// Clone shares the underlying map via `Arc`, so fixtures inserted on
/// one handle are visible through every other.
#[derive(Default, Clone)]
pub struct InMemoryCredentialStore {
    records: Arc<RwLock<HashMap<EmailAddress, CredentialRecord>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a record. The map is keyed by the record's canonical email.
    pub async fn insert(&self, record: CredentialRecord) {
        let mut records = self.records.write().await;
        records.insert(record.email().clone(), record);
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use fake::{Fake, faker::internet::en::SafeEmail};
    use uuid::Uuid;

    use super::*;

    fn record(email: &EmailAddress) -> CredentialRecord {
        CredentialRecord::new(
            Uuid::new_v4(),
            email.clone(),
            None,
            "Test User".to_string(),
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_find_returns_seeded_record() {
        let raw: String = SafeEmail().fake();
        let email = EmailAddress::try_from(raw).unwrap();
        let store = InMemoryCredentialStore::new();
        store.insert(record(&email)).await;

        let found = store.find_by_email(&email).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email(), &email);
    }

    #[tokio::test]
    async fn test_find_missing_is_none_not_error() {
        let store = InMemoryCredentialStore::new();
        let email = EmailAddress::try_from("nobody@x.com").unwrap();

        assert!(matches!(store.find_by_email(&email).await, Ok(None)));
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InMemoryCredentialStore::new();
        let handle = store.clone();
        let email = EmailAddress::try_from("a@x.com").unwrap();
        store.insert(record(&email)).await;

        assert!(handle.find_by_email(&email).await.unwrap().is_some());
    }
}
