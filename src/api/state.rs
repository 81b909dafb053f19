//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::{CredentialVerifier, JwtGenerator};
use crate::infrastructure::user_config::UserConfigService;

use super::middleware::AllowList;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_config_service: Arc<UserConfigService>,
    /// Present only when route protection is enabled
    pub auth: Option<AuthState>,
}

/// Everything the auth gate and `/login` need
#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub allow_list: Arc<AllowList>,
}

impl AppState {
    pub fn new(user_config_service: Arc<UserConfigService>) -> Self {
        Self {
            user_config_service,
            auth: None,
        }
    }

    pub fn with_auth(mut self, auth: AuthState) -> Self {
        self.auth = Some(auth);
        self
    }
}
