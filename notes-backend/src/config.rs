use std::env;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Origin of the front-end that renders shared notes (e.g. "https://notes.example.com").
    /// Share URLs are built as `{SHARE_BASE_URL}/shared/{token}`.
    pub const SHARE_BASE_URL: &str = "SHARE_BASE_URL";
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "./.db/notes.db";
    pub const SHARE_BASE_URL: &str = "http://localhost:3000";
    pub const DB_POOL_SIZE: u32 = 8;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub share_base_url: String,
    pub db_pool_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::PORT,
            bind_address: defaults::BIND_ADDRESS.to_string(),
            database_url: defaults::DATABASE_URL.to_string(),
            share_base_url: defaults::SHARE_BASE_URL.to_string(),
            db_pool_size: defaults::DB_POOL_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in production)
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let share_base_url = lookup(env_vars::SHARE_BASE_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| defaults::SHARE_BASE_URL.to_string());

        Self {
            port: parse_or_default(&lookup, env_vars::PORT, defaults::PORT),
            bind_address: lookup(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            database_url: lookup(env_vars::DATABASE_URL)
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            share_base_url,
            db_pool_size: parse_or_default(&lookup, env_vars::DB_POOL_SIZE, defaults::DB_POOL_SIZE)
                .max(1),
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} must be a valid number (got {:?}), using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.bind_address, defaults::BIND_ADDRESS);
        assert_eq!(config.database_url, defaults::DATABASE_URL);
        assert_eq!(config.share_base_url, defaults::SHARE_BASE_URL);
        assert_eq!(config.db_pool_size, defaults::DB_POOL_SIZE);
    }

    #[test]
    fn test_share_base_url_trailing_slash_trimmed() {
        let config = config_from(&[(env_vars::SHARE_BASE_URL, "https://notes.example.com/")]);
        assert_eq!(config.share_base_url, "https://notes.example.com");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[(env_vars::PORT, "eighty"), (env_vars::DB_POOL_SIZE, "0")]);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.db_pool_size, 1);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (env_vars::PORT, "9000"),
            (env_vars::DATABASE_URL, "/tmp/notes.db"),
            (env_vars::BIND_ADDRESS, "127.0.0.1"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "/tmp/notes.db");
        assert_eq!(config.bind_address, "127.0.0.1");
    }
}
