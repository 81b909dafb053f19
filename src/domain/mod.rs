//! Domain layer - Core entities and capability traits

pub mod document_store;
pub mod error;
pub mod user_config;

pub use document_store::{DocumentPath, DocumentStore};
pub use error::DomainError;
pub use user_config::{is_truthy, ActiveStatusParse, UserConfig, UserId};
