//! API middleware components

pub mod auth_gate;
pub mod logging;

pub use auth_gate::{auth_gate, extract_jwt_token, AllowList, AuthenticatedUser};
pub use logging::logging_middleware;
