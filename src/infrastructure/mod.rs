//! Infrastructure layer - External service implementations

pub mod auth;
pub mod document_store;
pub mod logging;
pub mod user_config;
