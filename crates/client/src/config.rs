use std::str::FromStr;
use std::time::Duration;

/// Errors raised while reading [`ClientConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
#[error("{name} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub name: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    /// Upper bound on the initial backend fetch in [`crate::store::CarStore::load`].
    pub load_guard: Duration,
    /// Lifetime of cached brand and model listings.
    pub cache_ttl: Duration,
    /// Extra attempts for idempotent reads. `0` disables retrying.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".into(),
            load_guard: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(60),
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `CATALOG_BACKEND_URL`     | `http://localhost:8080`  |
    /// | `CATALOG_LOAD_GUARD_SECS` | `10`                     |
    /// | `CATALOG_CACHE_TTL_SECS`  | `60`                     |
    /// | `CATALOG_MAX_RETRIES`     | `0`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("CATALOG_BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:8080".into());

        Ok(Self {
            backend_url,
            load_guard: Duration::from_secs(parse_var("CATALOG_LOAD_GUARD_SECS", "10", "u64")?),
            cache_ttl: Duration::from_secs(parse_var("CATALOG_CACHE_TTL_SECS", "60", "u64")?),
            max_retries: parse_var("CATALOG_MAX_RETRIES", "0", "u32")?,
        })
    }

    /// Default configuration pointed at `backend_url`.
    pub fn for_backend(backend_url: impl Into<String>) -> Self {
        let backend_url: String = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
    value.trim().parse().map_err(|_| ConfigError {
        name,
        expected,
        value,
    })
}
