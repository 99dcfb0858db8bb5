use crate::store::ReadFailurePolicy;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DATA_PATH_KEY: &str = "CUSTOMER_DATA_PATH";
pub const FALLBACK_URL_KEY: &str = "CUSTOMER_FALLBACK_URL";
pub const SENTINEL_KEY: &str = "CUSTOMER_SENTINEL_ON_FAILURE";

pub const DEFAULT_DATA_PATH: &str = "./Data/customers.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_path: PathBuf,
    /// Full URL of a read-only copy of the document, tried when the file is missing.
    pub fallback_url: Option<String>,
    pub read_failure: ReadFailurePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            fallback_url: None,
            read_failure: ReadFailurePolicy::Empty,
        }
    }
}

impl StoreConfig {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup(DATA_PATH_KEY)
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

        let fallback_url = lookup(FALLBACK_URL_KEY).filter(|url| !url.trim().is_empty());

        let read_failure = match lookup(SENTINEL_KEY) {
            Some(flag) if parse_flag(&flag) => ReadFailurePolicy::Sentinel,
            _ => ReadFailurePolicy::Empty,
        };

        Self {
            data_path,
            fallback_url,
            read_failure,
        }
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let vars = HashMap::from([
            (DATA_PATH_KEY, "/tmp/store/customers.json"),
            (FALLBACK_URL_KEY, "http://localhost:5000/data/customers.json"),
            (SENTINEL_KEY, "TRUE"),
        ]);

        let config = StoreConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_path, PathBuf::from("/tmp/store/customers.json"));
        assert_eq!(
            config.fallback_url.as_deref(),
            Some("http://localhost:5000/data/customers.json")
        );
        assert_eq!(config.read_failure, ReadFailurePolicy::Sentinel);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = StoreConfig::from_lookup(|key| match key {
            SENTINEL_KEY => Some("no".to_string()),
            _ => Some("  ".to_string()),
        });

        assert_eq!(config, StoreConfig::default());
    }
}
