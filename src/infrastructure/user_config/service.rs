//! User configuration service over the document store

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::UserConfigConfig;
use crate::domain::{
    is_truthy, ActiveStatusParse, DocumentPath, DocumentStore, DomainError, UserConfig, UserId,
};

/// Message used for every missing-user outcome
pub const USER_NOT_FOUND: &str = "User not found";

/// Settings injected into the service at startup
#[derive(Debug, Clone)]
pub struct UserConfigSettings {
    pub namespace: String,
    pub default_avatar: String,
    pub status_parse: ActiveStatusParse,
}

impl UserConfigSettings {
    pub fn new(namespace: impl Into<String>, config: &UserConfigConfig) -> Self {
        Self {
            namespace: namespace.into(),
            default_avatar: config.default_avatar.clone(),
            status_parse: ActiveStatusParse::from_strict_flag(config.strict_status_parse),
        }
    }
}

/// Request for creating (or overwriting) a user configuration
#[derive(Debug, Clone)]
pub struct CreateUserConfigRequest {
    pub id_user: UserId,
    pub active_status: bool,
    /// `None` when the field was not sent, `Some(None)` for an explicit null
    pub avatar: Option<Option<String>>,
}

/// Create, read and update user configuration documents
#[derive(Debug)]
pub struct UserConfigService {
    store: Arc<dyn DocumentStore>,
    settings: UserConfigSettings,
}

impl UserConfigService {
    pub fn new(store: Arc<dyn DocumentStore>, settings: UserConfigSettings) -> Self {
        Self { store, settings }
    }

    fn path_for(&self, id_user: &str) -> Result<DocumentPath, DomainError> {
        DocumentPath::new(&self.settings.namespace, id_user)
    }

    /// Write the full document, replacing anything stored under the same id
    pub async fn create(&self, request: CreateUserConfigRequest) -> Result<UserConfig, DomainError> {
        let avatar = request
            .avatar
            .unwrap_or_else(|| Some(self.settings.default_avatar.clone()));
        let config = UserConfig::new(request.id_user, request.active_status, avatar);
        let path = self.path_for(&config.id_user.to_string())?;

        self.store.write(&path, &config.to_document()).await?;

        info!(path = %path, "User config created");
        Ok(config)
    }

    /// The stored document exactly as the database holds it
    pub async fn get(&self, id_user: &str) -> Result<Value, DomainError> {
        let path = self.path_for(id_user)?;

        self.store
            .read(&path)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Parse the raw status literal and set it on an existing user
    pub async fn set_active_status(&self, id_user: &str, raw_status: &str) -> Result<bool, DomainError> {
        let active_status = self.settings.status_parse.parse(raw_status)?;
        let path = self.path_for(id_user)?;

        if self.store.read(&path).await?.is_none() {
            debug!(path = %path, "Active status update for missing user");
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }

        let mut partial = Map::new();
        partial.insert("active_status".to_string(), Value::Bool(active_status));
        self.store.merge(&path, &partial).await?;

        info!(path = %path, active_status, "User active status updated");
        Ok(active_status)
    }

    /// Replace the avatar of a user whose stored document carries an `id_user`
    pub async fn set_avatar(&self, id_user: &str, avatar: String) -> Result<(), DomainError> {
        let path = self.path_for(id_user)?;

        let has_identity = self
            .store
            .read(&path)
            .await?
            .as_ref()
            .and_then(|doc| doc.get("id_user"))
            .is_some_and(is_truthy);

        if !has_identity {
            debug!(path = %path, "Avatar update for missing user");
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }

        let mut partial = Map::new();
        partial.insert("avatar".to_string(), Value::String(avatar));
        self.store.merge(&path, &partial).await?;

        info!(path = %path, "User avatar updated");
        Ok(())
    }
}
