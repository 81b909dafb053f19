//! In-memory document store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{DocumentPath, DocumentStore, DomainError};

/// Thread-safe in-memory document store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(path, document)` pairs
    pub fn with_documents(documents: Vec<(DocumentPath, Value)>) -> Self {
        let store = Self::new();
        {
            let mut map = store
                .documents
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            for (path, document) in documents {
                map.insert(path.as_str().to_string(), document);
            }
        }
        store
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(&self, path: &DocumentPath) -> Result<Option<Value>, DomainError> {
        let documents = self.documents.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(documents.get(path.as_str()).cloned())
    }

    async fn write(&self, path: &DocumentPath, document: &Value) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        // Writing null deletes, matching the realtime database
        if document.is_null() {
            documents.remove(path.as_str());
        } else {
            documents.insert(path.as_str().to_string(), document.clone());
        }
        Ok(())
    }

    async fn merge(
        &self,
        path: &DocumentPath,
        partial: &Map<String, Value>,
    ) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let entry = documents
            .entry(path.as_str().to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }

        if let Value::Object(fields) = entry {
            for (key, value) in partial {
                fields.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(key: &str) -> DocumentPath {
        DocumentPath::new("userconfig", key).unwrap()
    }

    #[tokio::test]
    async fn test_read_absent() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.read(&path("1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let store = InMemoryDocumentStore::new();
        store
            .write(&path("1"), &json!({"a": 1, "b": 2}))
            .await
            .unwrap();
        store.write(&path("1"), &json!({"a": 3})).await.unwrap();

        assert_eq!(store.read(&path("1")).await.unwrap(), Some(json!({"a": 3})));
    }

    #[tokio::test]
    async fn test_write_null_deletes() {
        let store = InMemoryDocumentStore::with_documents(vec![(path("1"), json!({"a": 1}))]);
        store.write(&path("1"), &Value::Null).await.unwrap();

        assert_eq!(store.read(&path("1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_merge_keeps_other_fields() {
        let store =
            InMemoryDocumentStore::with_documents(vec![(path("1"), json!({"a": 1, "b": 2}))]);

        let mut partial = Map::new();
        partial.insert("b".to_string(), json!(5));
        store.merge(&path("1"), &partial).await.unwrap();

        assert_eq!(
            store.read(&path("1")).await.unwrap(),
            Some(json!({"a": 1, "b": 5}))
        );
    }
}
