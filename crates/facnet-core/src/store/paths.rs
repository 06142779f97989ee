//! Store path constants and discovery

use std::path::{Path, PathBuf};

use crate::error::{FacnetError, Result};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".facnet";

/// Configuration file name inside the store
pub const CONFIG_FILE: &str = "config.toml";

/// Default relationship table written by `export`
pub const RELATIONSHIP_TABLE_FILE: &str = "relationship_table.csv";

/// Discover the store by walking up from `root`
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(FacnetError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
