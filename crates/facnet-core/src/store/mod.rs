//! Store management for facnet
//!
//! The store is a directory (default `.facnet/`) holding `config.toml` and
//! the facility and connection tables. Commands load the whole network,
//! run, and write it back when they changed it.

pub mod csv;
pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::NetworkConfig;
use crate::error::{FacnetError, Result};
use crate::graph::Network;
use crate::trace_time;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// The facnet store
#[derive(Debug)]
pub struct NetworkStore {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: NetworkConfig,
}

impl NetworkStore {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(FacnetError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            NetworkConfig::load(&config_path)?
        } else {
            NetworkConfig::default()
        };

        Ok(NetworkStore {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path.
    ///
    /// Idempotent: existing configuration and data files are left untouched.
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)
            .map_err(|e| FacnetError::io_operation("create", store_root.display(), e))?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            NetworkConfig::load(&config_path)?
        } else {
            let config = NetworkConfig::default();
            config.save(&config_path)?;
            config
        };

        let store = NetworkStore {
            root: store_root.to_path_buf(),
            config,
        };

        if !store.facilities_path().exists() {
            fs::write(
                store.facilities_path(),
                format!("{}\n", csv::FACILITIES_HEADER),
            )?;
        }
        if !store.connections_path().exists() {
            fs::write(
                store.connections_path(),
                format!("{}\n", csv::CONNECTIONS_HEADER),
            )?;
        }

        tracing::info!(root = %store_root.display(), "store_initialized");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn facilities_path(&self) -> PathBuf {
        self.root.join(&self.config.files.facilities)
    }

    pub fn connections_path(&self) -> PathBuf {
        self.root.join(&self.config.files.connections)
    }

    /// Load the network from the data files.
    ///
    /// Missing files load as empty. Malformed lines, duplicate facilities
    /// and connections whose endpoints are unknown are skipped with a
    /// warning. A facility id above the configured `max_node_id` fails the
    /// load with `InvalidStore`.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self) -> Result<Network> {
        let start = Instant::now();
        let mut network = Network::with_max_node_id(self.config.max_node_id);

        let facilities_path = self.facilities_path();
        for (line_no, line) in read_records(&facilities_path)? {
            let added = match csv::parse_facility(&line) {
                Ok(facility) => {
                    // Dropping it here would erase it on the next save
                    if facility.id.value() > self.config.max_node_id {
                        return Err(FacnetError::InvalidStore {
                            reason: format!(
                                "{} line {}: facility id {} exceeds max_node_id {}",
                                facilities_path.display(),
                                line_no,
                                facility.id,
                                self.config.max_node_id
                            ),
                        });
                    }
                    network.add_facility(facility).map_err(|e| e.to_string())
                }
                Err(reason) => Err(reason),
            };
            if let Err(reason) = added {
                tracing::warn!(
                    file = %facilities_path.display(),
                    line = line_no,
                    %reason,
                    "skipping facility record"
                );
            }
        }

        let connections_path = self.connections_path();
        for (line_no, line) in read_records(&connections_path)? {
            let added = csv::parse_connection(&line).and_then(|connection| {
                network
                    .add_connection(connection)
                    .map_err(|e| e.to_string())
            });
            if let Err(reason) = added {
                tracing::warn!(
                    file = %connections_path.display(),
                    line = line_no,
                    %reason,
                    "skipping connection record"
                );
            }
        }

        trace_time!(
            start,
            "load_network",
            facilities = network.len(),
            connections = network.connection_count()
        );
        Ok(network)
    }

    /// Write the network back to the data files
    #[tracing::instrument(skip(self, network), fields(root = %self.root.display()))]
    pub fn save(&self, network: &Network) -> Result<()> {
        let facilities = csv::render(
            csv::FACILITIES_HEADER,
            network.facilities(),
            csv::facility_line,
        );
        let path = self.facilities_path();
        fs::write(&path, facilities)
            .map_err(|e| FacnetError::io_operation("write", path.display(), e))?;

        self.write_connections(network, &self.connections_path())?;
        tracing::debug!(
            facilities = network.len(),
            connections = network.connection_count(),
            "network_saved"
        );
        Ok(())
    }

    /// Write the relationship table (every connection) to `path`.
    /// Returns the number of connections written.
    pub fn export_relationships(&self, network: &Network, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| FacnetError::io_operation("create", parent.display(), e))?;
        }
        self.write_connections(network, path)?;
        Ok(network.connection_count())
    }

    fn write_connections(&self, network: &Network, path: &Path) -> Result<()> {
        let connections = csv::render(
            csv::CONNECTIONS_HEADER,
            network.connections(),
            csv::connection_line,
        );
        fs::write(path, connections)
            .map_err(|e| FacnetError::io_operation("write", path.display(), e))
    }
}

/// Non-empty data lines after the header, with 1-based line numbers
fn read_records(path: &Path) -> Result<Vec<(usize, String)>> {
    if !path.exists() {
        tracing::debug!(file = %path.display(), "data file missing, treating as empty");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| FacnetError::io_operation("read", path.display(), e))?;

    Ok(content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect())
}
