use std::env;
use std::str::FromStr;

/// Which gate the management routes under the public prefixes carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Event mutations and the public registration/contact listings stay open.
    #[default]
    Compatible,
    /// Every management route requires an admin token.
    Strict,
}

impl FromStr for AccessPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compatible" => Ok(Self::Compatible),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::Invalid {
                key: "ACCESS_POLICY",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings the router itself needs. Tests build this directly.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub access_policy: AccessPolicy,
    pub auth_rate_limit_burst: u32,
    pub auth_rate_limit_per_minute: u32,
    pub max_body_bytes: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            access_policy: AccessPolicy::Compatible,
            auth_rate_limit_burst: 20,
            auth_rate_limit_per_minute: 30,
            max_body_bytes: 1024 * 100,
        }
    }
}

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub http: HttpSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let jwt_secret = required(&lookup, "JWT_SECRET")?;

        let defaults = HttpSettings::default();

        Ok(Self {
            database_url,
            jwt_secret,
            port: parsed(&lookup, "PORT", 5000)?,
            db_max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            run_migrations: parsed(&lookup, "RUN_MIGRATIONS", true)?,
            http: HttpSettings {
                access_policy: parsed(&lookup, "ACCESS_POLICY", defaults.access_policy)?,
                auth_rate_limit_burst: parsed(
                    &lookup,
                    "AUTH_RATE_LIMIT_BURST",
                    defaults.auth_rate_limit_burst,
                )?,
                auth_rate_limit_per_minute: parsed(
                    &lookup,
                    "AUTH_RATE_LIMIT_PER_MINUTE",
                    defaults.auth_rate_limit_per_minute,
                )?,
                max_body_bytes: parsed(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
