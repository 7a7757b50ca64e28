pub mod in_memory_credential_store;
pub mod postgres_credential_store;
