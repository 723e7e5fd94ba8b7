// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    listen_addr: String,
    default_page_size: u64,
    max_page_size: u64,
    catalog_size: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_page_size() -> u64 {
    15
}

const fn default_max_page_size() -> u64 {
    100
}

const fn default_catalog_size() -> usize {
    115
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            catalog_size: default_catalog_size(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let default_page_size = parse_number(&lookup, "DEFAULT_PAGE_SIZE")?
            .unwrap_or_else(default_page_size);
        let max_page_size =
            parse_number(&lookup, "MAX_PAGE_SIZE")?.unwrap_or_else(default_max_page_size);
        let catalog_size = parse_number::<usize, _>(&lookup, "CATALOG_SIZE")?
            .unwrap_or_else(default_catalog_size);

        if default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "DEFAULT_PAGE_SIZE must be greater than 0".into(),
            ));
        }
        if max_page_size < default_page_size {
            return Err(ConfigError::Invalid(format!(
                "MAX_PAGE_SIZE ({max_page_size}) must be at least DEFAULT_PAGE_SIZE ({default_page_size})"
            )));
        }

        Ok(Self {
            listen_addr,
            default_page_size,
            max_page_size,
            catalog_size,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn default_page_size(&self) -> u64 {
        self.default_page_size
    }

    pub const fn max_page_size(&self) -> u64 {
        self.max_page_size
    }

    /// Number of planets generated at startup.
    pub const fn catalog_size(&self) -> usize {
        self.catalog_size
    }
}

fn parse_number<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got {raw:?}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&'static str, String> = pairs
            .iter()
            .map(|(key, value)| (*key, (*value).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.default_page_size(), 15);
        assert_eq!(config.max_page_size(), 100);
        assert_eq!(config.catalog_size(), 115);
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = config_from(&[
            ("LISTEN_ADDR", "0.0.0.0:9000"),
            ("DEFAULT_PAGE_SIZE", "10"),
            ("MAX_PAGE_SIZE", " 20 "),
            ("CATALOG_SIZE", "3"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.default_page_size(), 10);
        assert_eq!(config.max_page_size(), 20);
        assert_eq!(config.catalog_size(), 3);
    }

    #[test]
    fn rejects_inconsistent_page_sizes() {
        assert!(matches!(
            config_from(&[("DEFAULT_PAGE_SIZE", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("DEFAULT_PAGE_SIZE", "50"), ("MAX_PAGE_SIZE", "10")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("CATALOG_SIZE", "many")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn blank_listen_address_is_missing() {
        assert!(matches!(
            config_from(&[("LISTEN_ADDR", "  ")]),
            Err(ConfigError::Missing("LISTEN_ADDR"))
        ));
    }
}
