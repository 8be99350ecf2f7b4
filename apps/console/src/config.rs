//! # Console Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FOLIO_*`)
//! 2. Config file (`config.json` in the data directory)
//! 3. Defaults (this file)
//!
//! A missing or unreadable config file is not an error; the console warns
//! and falls back to defaults, because losing the store name must never
//! block a sale.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use folio_store::store::DEFAULT_STORE_NAME;

/// Console configuration file name, inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Store name (displayed on receipts)
    pub store_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from `<data_dir>/config.json`, then applies
    /// environment overrides.
    ///
    /// ## Environment Variables
    /// - `FOLIO_STORE_NAME`: Override the store name
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(config) => config,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
                        ConsoleConfig::default()
                    }
                },
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "unreadable config file, using defaults");
                    ConsoleConfig::default()
                }
            }
        } else {
            ConsoleConfig::default()
        };

        if let Ok(name) = std::env::var("FOLIO_STORE_NAME") {
            config.store_name = name;
        }

        config
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConsoleConfig::load(dir.path());
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }

    #[test]
    fn test_loads_store_name_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "storeName": "Harborview Books" }"#,
        )
        .unwrap();

        let config = ConsoleConfig::load(dir.path());
        assert_eq!(config.store_name, "Harborview Books");
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json at all").unwrap();

        let config = ConsoleConfig::load(dir.path());
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }
}
