//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig, StaticUser, StoreBackend,
    StoreConfig, UserConfigConfig, VerifierMode, DEFAULT_AVATAR_URL,
};
