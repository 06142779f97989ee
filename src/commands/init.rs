//! `facnet init` command - create a new store
//!
//! Idempotent: an existing store is reported, not overwritten.

use std::path::Path;

use facnet_core::error::Result;
use facnet_core::store::NetworkStore;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let store = match cli.store.as_ref() {
        Some(path) => NetworkStore::init_at(&resolve_against(root, path))?,
        None => NetworkStore::init(root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                &[
                    ("store", serde_json::json!(store.root().display().to_string())),
                    ("message", serde_json::json!("Store initialized")),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!("Initialized facnet store at {}", store.root().display());
            }
        },
        records => {
            print_records_header(&store, "init", "status=ok");
        }
    )
}
