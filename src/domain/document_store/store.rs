//! Document store trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::DomainError;

use super::path::DocumentPath;

/// Remote key-addressed JSON document store
///
/// Implementations pass failures through as [`DomainError::Storage`] carrying
/// the backend's own message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Reads the document at `path`, `None` when nothing is stored there
    async fn read(&self, path: &DocumentPath) -> Result<Option<Value>, DomainError>;

    /// Replaces whatever is stored at `path` with `document`
    async fn write(&self, path: &DocumentPath, document: &Value) -> Result<(), DomainError>;

    /// Sets only the given top-level fields, leaving the others untouched
    async fn merge(
        &self,
        path: &DocumentPath,
        partial: &Map<String, Value>,
    ) -> Result<(), DomainError>;
}
