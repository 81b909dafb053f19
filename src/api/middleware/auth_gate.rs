//! Bearer-token gate in front of every protected route

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::state::AuthState;
use crate::api::types::ApiError;
use crate::infrastructure::auth::JwtClaims;

/// Paths reachable without a token
///
/// An entry matches the exact path and anything nested below it, so
/// `/api-docs` also admits `/api-docs/openapi.json` but not `/api-docsx`.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    paths: Vec<String>,
}

impl AllowList {
    pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            paths: paths
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn permits(&self, path: &str) -> bool {
        self.paths.iter().any(|allowed| {
            path.strip_prefix(allowed.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

/// Claims of the caller, inserted into request extensions by [`auth_gate`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub JwtClaims);

/// Rejects requests to non-allow-listed paths lacking a valid bearer token
pub async fn auth_gate(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if auth.allow_list.permits(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = extract_jwt_token(request.headers())?;

    debug!("Validating JWT token");
    let claims = auth
        .jwt_service
        .validate(&token)
        .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

    request.extensions_mut().insert(AuthenticatedUser(claims));
    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
pub fn extract_jwt_token(headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide JWT token via 'Authorization: Bearer <token>' header",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_allow_list_matching() {
        let list = AllowList::new(["/login", "/api-docs/"]);

        assert!(list.permits("/login"));
        assert!(list.permits("/api-docs"));
        assert!(list.permits("/api-docs/openapi.json"));

        assert!(!list.permits("/loginx"));
        assert!(!list.permits("/addUser"));
        assert!(!list.permits("/"));
    }

    #[test]
    fn test_empty_entries_ignored() {
        let list = AllowList::new(["", "/"]);
        assert!(!list.permits("/addUser"));
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer eyJhbGciOiJIUzI1NiJ9.test".parse().unwrap(),
        );

        assert_eq!(
            extract_jwt_token(&headers).unwrap(),
            "eyJhbGciOiJIUzI1NiJ9.test"
        );
    }

    #[test]
    fn test_missing_token() {
        let err = extract_jwt_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_auth_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(extract_jwt_token(&headers).is_err());
    }

    #[test]
    fn test_empty_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer    ".parse().unwrap());

        assert!(extract_jwt_token(&headers).is_err());
    }
}
