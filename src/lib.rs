//! User configuration gateway
//!
//! An HTTP front over a Firebase Realtime Database that creates, reads and
//! updates per-user configuration documents, optionally behind a JWT gate.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::middleware::AllowList;
use api::state::{AppState, AuthState};
use infrastructure::{
    auth::{create_verifier, JwtConfig, JwtService},
    document_store::DocumentStoreFactory,
    user_config::{UserConfigService, UserConfigSettings},
};
use rand::Rng;
use tracing::{info, warn};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = DocumentStoreFactory::create(&config.store)?;

    let settings = UserConfigSettings::new(&config.store.namespace, &config.user_config);
    info!(
        namespace = %settings.namespace,
        status_parse = ?settings.status_parse,
        "User config service ready"
    );

    let state = AppState::new(Arc::new(UserConfigService::new(store, settings)));

    if !config.auth.enabled {
        info!("Authentication disabled; all routes are open");
        return Ok(state);
    }

    Ok(state.with_auth(create_auth_state(&config.auth)))
}

fn create_auth_state(config: &crate::config::AuthConfig) -> AuthState {
    let secret = config
        .jwt_secret
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            warn!(
                "No auth.jwt_secret configured. Generating random secret. \
                 Tokens will NOT survive restarts."
            );
            generate_random_secret()
        });

    info!(
        ttl_secs = config.token_ttl_secs,
        allow_list = ?config.allow_list,
        "Authentication enabled"
    );

    AuthState {
        jwt_service: Arc::new(JwtService::new(JwtConfig::new(secret, config.token_ttl_secs))),
        verifier: create_verifier(config),
        allow_list: Arc::new(AllowList::new(config.allow_list.iter().cloned())),
    }
}

/// Generate a random JWT secret
fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StoreBackend, VerifierMode};
    use crate::infrastructure::auth::JwtGenerator;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config
    }

    #[test]
    fn test_state_without_auth() {
        let state = create_app_state(&memory_config()).unwrap();
        assert!(state.auth.is_none());
    }

    #[test]
    fn test_state_with_auth() {
        let mut config = memory_config();
        config.auth.enabled = true;
        config.auth.verifier = VerifierMode::Placeholder;
        config.auth.jwt_secret = Some("configured".to_string());

        let state = create_app_state(&config).unwrap();
        let auth = state.auth.unwrap();

        assert!(auth.allow_list.permits("/login"));
        assert!(!auth.allow_list.permits("/addUser"));
        assert!(auth.verifier.verify("a", "b"));

        let issued = auth.jwt_service.generate("s", "a").unwrap();
        let other = JwtService::new(JwtConfig::new("configured", 3600));
        assert!(other.validate(&issued.token).is_ok());
    }

    #[tokio::test]
    async fn test_default_config_treats_unknown_status_as_inactive() {
        use crate::infrastructure::user_config::CreateUserConfigRequest;

        let state = create_app_state(&memory_config()).unwrap();
        let service = &state.user_config_service;
        service
            .create(CreateUserConfigRequest {
                id_user: "u1".into(),
                active_status: true,
                avatar: None,
            })
            .await
            .unwrap();

        assert!(!service.set_active_status("u1", "yes").await.unwrap());
        assert_eq!(
            service.get("u1").await.unwrap()["active_status"],
            serde_json::json!(false)
        );
    }

    #[test]
    fn test_firebase_without_url_fails() {
        assert!(create_app_state(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_random_secret() {
        let secret = generate_random_secret();
        assert_eq!(secret.len(), 64);
        assert_ne!(secret, generate_random_secret());
    }
}
