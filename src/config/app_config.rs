use serde::Deserialize;

/// Avatar stored when a user is created without one
pub const DEFAULT_AVATAR_URL: &str = "https://firebasestorage.googleapis.com/v0/b/brilliant-era-407902.appspot.com/o/avatars%2F00a8d634116e1179823d8465b168a2c6.jpg?alt=media&token=ae11ef4f-acc2-4551-b6aa-15882de721fc";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub user_config: UserConfigConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which document store backend serves the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Firebase,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Realtime database root, e.g. `https://<project>-default-rtdb.firebaseio.com`
    pub database_url: Option<String>,
    /// Database secret or ID token passed as the `auth` query parameter
    pub auth_token: Option<String>,
    /// Key prefix every user document lives under
    pub namespace: String,
    /// Per-request timeout; unset means requests wait for the remote
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserConfigConfig {
    pub default_avatar: String,
    /// Reject active-status literals other than `1` and `0`
    pub strict_status_parse: bool,
}

/// How `/login` decides whether a username/password pair is acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerifierMode {
    /// Only the users listed under `auth.users`
    #[default]
    Static,
    /// Any non-empty pair. Development only.
    Placeholder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticUser {
    pub username: String,
    /// Argon2 PHC string, see the `hash-password` command
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    pub verifier: VerifierMode,
    pub users: Vec<StaticUser>,
    /// Subject embedded in tokens issued by the placeholder verifier
    pub placeholder_subject: String,
    /// Paths reachable without a bearer token
    pub allow_list: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url: None,
            auth_token: None,
            namespace: "userconfig".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for UserConfigConfig {
    fn default() -> Self {
        Self {
            default_avatar: DEFAULT_AVATAR_URL.to_string(),
            strict_status_parse: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            jwt_secret: None,
            token_ttl_secs: 3600,
            verifier: VerifierMode::default(),
            users: Vec::new(),
            placeholder_subject: "placeholder-user".to_string(),
            allow_list: vec![
                "/login".to_string(),
                "/api-docs".to_string(),
                "/health".to_string(),
                "/live".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, `APP__*` environment
    /// variables, then a bare `PORT` which wins over everything else.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
