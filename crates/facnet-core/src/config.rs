//! Store configuration for facnet
//!
//! Configuration is stored in `.facnet/config.toml`; every field has a
//! default so a missing or partial file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{FacnetError, Result};

pub use types::{FilesConfig, NetworkConfig, STORE_FORMAT_VERSION};

impl NetworkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetworkConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(FacnetError::InvalidStore {
                reason: format!(
                    "store format version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FacnetError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
