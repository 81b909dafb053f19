//! Token issuance endpoint

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AuthState;
use crate::api::types::{ApiError, Json};

/// Create the authentication router
pub fn create_auth_router() -> Router<AuthState> {
    Router::new().route("/login", post(login))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
}

/// Exchange a username and password for a bearer token
///
/// POST /login
pub async fn login(
    State(auth): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("username and password are required"));
    }

    // Password hashing is CPU bound and must stay off the async workers
    let verifier = auth.verifier.clone();
    let LoginRequest { username, password } = request;
    let (username, accepted) = tokio::task::spawn_blocking(move || {
        let accepted = verifier.verify(&username, &password);
        (username, accepted)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Credential check failed: {}", e)))?;

    if !accepted {
        debug!(username = %username, "Login rejected");
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let subject = auth.verifier.subject(&username);
    let issued = auth.jwt_service.generate(&subject, &username)?;

    info!(subject = %subject, "Token issued");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at.to_rfc3339(),
    }))
}
