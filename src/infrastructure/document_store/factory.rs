//! Document store factory for runtime backend selection

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::{DocumentStore, DomainError};

use super::firebase::FirebaseRealtimeStore;
use super::in_memory::InMemoryDocumentStore;

/// Factory for creating the configured document store backend
pub struct DocumentStoreFactory;

impl DocumentStoreFactory {
    pub fn create(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, DomainError> {
        match config.backend {
            StoreBackend::Memory => {
                info!("Using in-memory document store");
                Ok(Arc::new(InMemoryDocumentStore::new()))
            }
            StoreBackend::Firebase => {
                let database_url = config.database_url.as_deref().ok_or_else(|| {
                    DomainError::configuration(
                        "store.database_url is required for the firebase backend",
                    )
                })?;

                info!(database_url = %database_url, "Using Firebase Realtime Database");
                let store = FirebaseRealtimeStore::new(
                    database_url,
                    config.auth_token.clone(),
                    config.timeout_secs.map(Duration::from_secs),
                )?;
                Ok(Arc::new(store))
            }
        }
    }
}
