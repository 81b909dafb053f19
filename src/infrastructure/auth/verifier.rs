//! Credential verification for token issuance

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use tracing::warn;

use crate::config::{AuthConfig, StaticUser, VerifierMode};

use super::password::verify_password;

/// Decides whether a username/password pair may receive a token
pub trait CredentialVerifier: Send + Sync + Debug {
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Identity embedded as the token subject for an accepted login
    fn subject(&self, username: &str) -> String {
        username.to_string()
    }
}

/// Accepts every non-empty pair and issues tokens for one fixed identity.
///
/// Placeholder mode for development: it performs no verification at all.
#[derive(Debug, Clone)]
pub struct PlaceholderVerifier {
    subject: String,
}

impl PlaceholderVerifier {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

impl CredentialVerifier for PlaceholderVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        !username.is_empty() && !password.is_empty()
    }

    fn subject(&self, _username: &str) -> String {
        self.subject.clone()
    }
}

/// Verifies against a fixed set of users with Argon2 password hashes
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialVerifier {
    users: HashMap<String, String>,
}

impl StaticCredentialVerifier {
    pub fn new(users: &[StaticUser]) -> Self {
        Self {
            users: users
                .iter()
                .map(|u| (u.username.clone(), u.password_hash.clone()))
                .collect(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|hash| verify_password(password, hash))
    }
}

/// Build the verifier selected by `auth.verifier`
pub fn create_verifier(config: &AuthConfig) -> Arc<dyn CredentialVerifier> {
    match config.verifier {
        VerifierMode::Placeholder => {
            warn!(
                subject = %config.placeholder_subject,
                "Placeholder credential verifier enabled: any non-empty username/password receives a token"
            );
            Arc::new(PlaceholderVerifier::new(&config.placeholder_subject))
        }
        VerifierMode::Static => {
            if config.users.is_empty() {
                warn!("Static credential verifier has no users configured; every login will be rejected");
            }
            Arc::new(StaticCredentialVerifier::new(&config.users))
        }
    }
}
