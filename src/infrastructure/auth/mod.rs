//! Authentication infrastructure module
//!
//! Token signing and validation, plus the credential check run before a
//! token is issued.

mod jwt;
mod password;
mod verifier;

pub use jwt::{IssuedToken, JwtClaims, JwtConfig, JwtGenerator, JwtService};
pub use password::{hash_password, verify_password};
pub use verifier::{
    create_verifier, CredentialVerifier, PlaceholderVerifier, StaticCredentialVerifier,
};
