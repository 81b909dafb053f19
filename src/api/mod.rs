//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod docs;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod user_config;

pub use router::create_router;
pub use state::{AppState, AuthState};
