use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::docs;
use super::health;
use super::middleware::{auth_gate, logging_middleware};
use super::state::AppState;
use super::user_config;

/// Create the full router with application state
///
/// With authentication enabled, `/login` is mounted and every route goes
/// through the auth gate; allow-listed paths pass without a token.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/api-docs", get(docs::openapi))
        .merge(user_config::create_user_config_router());

    if let Some(auth_state) = state.auth.clone() {
        router = router
            .merge(auth::create_auth_router().with_state::<AppState>(auth_state.clone()))
            .layer(middleware::from_fn_with_state(auth_state, auth_gate));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
