//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::network::DEFAULT_MAX_NODE_ID;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration, persisted as `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Inclusive upper bound for facility ids
    #[serde(default = "default_max_node_id")]
    pub max_node_id: u32,

    /// Connections are always inserted in both directions.
    ///
    /// When set, link edits apply to both arcs and cycle detection reads
    /// the network as undirected by default.
    #[serde(default)]
    pub symmetric: bool,

    /// Data file names, relative to the store root
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_facilities_file")]
    pub facilities: String,

    #[serde(default = "default_connections_file")]
    pub connections: String,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_max_node_id() -> u32 {
    DEFAULT_MAX_NODE_ID
}

fn default_facilities_file() -> String {
    "facilities.csv".to_string()
}

fn default_connections_file() -> String {
    "connections.csv".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            facilities: default_facilities_file(),
            connections: default_connections_file(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            version: default_version(),
            max_node_id: default_max_node_id(),
            symmetric: false,
            files: FilesConfig::default(),
        }
    }
}
