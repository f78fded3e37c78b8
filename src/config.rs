//! Environment-driven application configuration.
//!
//! Values are read through [`ConfigEnv`] so tests can supply a map instead of
//! mutating the process environment.

use std::fmt;
use thiserror::Error;

/// Database connection string.
pub const DATABASE_URL_ENV: &str = "TASKTRACK_DATABASE_URL";
/// Secret used to sign bearer credentials.
pub const JWT_SECRET_ENV: &str = "TASKTRACK_JWT_SECRET";
/// Credential lifetime in seconds.
pub const TOKEN_TTL_ENV: &str = "TASKTRACK_TOKEN_TTL_SECS";
/// Tracing filter directive.
pub const LOG_FILTER_ENV: &str = "TASKTRACK_LOG";
/// Tracing output format.
pub const LOG_FORMAT_ENV: &str = "TASKTRACK_LOG_FORMAT";

/// Minimum accepted signing secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Source of configuration values.
pub trait ConfigEnv {
    /// Returns the value for `name`, if set.
    fn string(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigEnv for ProcessEnv {
    fn string(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<F> ConfigEnv for F
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required variable {0}")]
    Missing(&'static str),

    /// The signing secret is too short.
    #[error("{JWT_SECRET_ENV} must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    SecretTooShort(usize),

    /// A variable holds an unusable value.
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Loaded configuration.
#[derive(Clone)]
pub struct AppConfig {
    database_url: Option<String>,
    jwt_secret: Vec<u8>,
    token_ttl_secs: i64,
    log_filter: String,
    log_format: LogFormat,
}

impl AppConfig {
    /// Default credential lifetime: one day.
    pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;
    const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env_with`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&ProcessEnv)
    }

    /// Loads configuration from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the secret is missing or short, or when
    /// the TTL or log format cannot be parsed.
    pub fn from_env_with(env: &impl ConfigEnv) -> Result<Self, ConfigError> {
        let secret = non_blank(env, JWT_SECRET_ENV).ok_or(ConfigError::Missing(JWT_SECRET_ENV))?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(secret.len()));
        }

        let token_ttl_secs = match non_blank(env, TOKEN_TTL_ENV) {
            None => Self::DEFAULT_TOKEN_TTL_SECS,
            Some(raw) => parse_ttl(&raw)?,
        };

        let log_format = match non_blank(env, LOG_FORMAT_ENV) {
            None => LogFormat::default(),
            Some(raw) => parse_format(&raw)?,
        };

        Ok(Self {
            database_url: non_blank(env, DATABASE_URL_ENV),
            jwt_secret: secret.into_bytes(),
            token_ttl_secs,
            log_filter: non_blank(env, LOG_FILTER_ENV)
                .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_owned()),
            log_format,
        })
    }

    /// Returns the database URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the signing secret.
    #[must_use]
    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }

    /// Returns the credential lifetime.
    #[must_use]
    pub const fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_secs)
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("log_filter", &self.log_filter)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn non_blank(env: &impl ConfigEnv, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_ttl(raw: &str) -> Result<i64, ConfigError> {
    // Capped at one year so the expiry timestamp never overflows.
    const MAX_TTL_SECS: i64 = 366 * 86_400;
    raw.parse::<i64>()
        .ok()
        .filter(|secs| (1..=MAX_TTL_SECS).contains(secs))
        .ok_or_else(|| ConfigError::Invalid {
            name: TOKEN_TTL_ENV,
            value: raw.to_owned(),
        })
}

fn parse_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "compact" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            name: LOG_FORMAT_ENV,
            value: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn applies_defaults_when_only_secret_is_set() {
        let config = AppConfig::from_env_with(&env_of(&[(JWT_SECRET_ENV, SECRET)]))
            .expect("config should load");
        assert_eq!(config.database_url(), None);
        assert_eq!(config.jwt_secret(), SECRET.as_bytes());
        assert_eq!(config.token_ttl(), chrono::Duration::seconds(86_400));
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_env_with(&env_of(&[
            (JWT_SECRET_ENV, SECRET),
            (DATABASE_URL_ENV, "postgres://localhost/tasks"),
            (TOKEN_TTL_ENV, "600"),
            (LOG_FILTER_ENV, "tasktrack=debug"),
            (LOG_FORMAT_ENV, "JSON"),
        ]))
        .expect("config should load");
        assert_eq!(config.database_url(), Some("postgres://localhost/tasks"));
        assert_eq!(config.token_ttl(), chrono::Duration::seconds(600));
        assert_eq!(config.log_filter(), "tasktrack=debug");
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[rstest]
    #[case::unset(&[], ConfigError::Missing(JWT_SECRET_ENV))]
    #[case::blank(&[(JWT_SECRET_ENV, "   ")], ConfigError::Missing(JWT_SECRET_ENV))]
    #[case::short(&[(JWT_SECRET_ENV, "short")], ConfigError::SecretTooShort(5))]
    #[case::zero_ttl(
        &[(JWT_SECRET_ENV, SECRET), (TOKEN_TTL_ENV, "0")],
        ConfigError::Invalid { name: TOKEN_TTL_ENV, value: "0".to_owned() },
    )]
    #[case::text_ttl(
        &[(JWT_SECRET_ENV, SECRET), (TOKEN_TTL_ENV, "soon")],
        ConfigError::Invalid { name: TOKEN_TTL_ENV, value: "soon".to_owned() },
    )]
    #[case::unknown_format(
        &[(JWT_SECRET_ENV, SECRET), (LOG_FORMAT_ENV, "pretty")],
        ConfigError::Invalid { name: LOG_FORMAT_ENV, value: "pretty".to_owned() },
    )]
    fn rejects_unusable_environments(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        let result = AppConfig::from_env_with(&env_of(pairs));
        assert_eq!(result.err(), Some(expected));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = AppConfig::from_env_with(&env_of(&[
            (JWT_SECRET_ENV, SECRET),
            (DATABASE_URL_ENV, "postgres://admin:hunter2@db/tasks"),
        ]))
        .expect("config should load");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains(SECRET));
        assert!(!rendered.contains("hunter2"));
    }
}
