//! `facnet export` - write the relationship table

use std::path::Path;

use facnet_core::error::Result;
use facnet_core::store::paths::RELATIONSHIP_TABLE_FILE;
use serde_json::json;

use crate::cli::paths::resolve_against;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};

pub fn execute(ctx: &CommandContext, output: Option<&Path>) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let target = resolve_against(ctx.root, output.unwrap_or(Path::new(RELATIONSHIP_TABLE_FILE)));
    let written = store.export_relationships(&network, &target)?;
    tracing::info!(path = %target.display(), connections = written, "relationships_exported");

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                &[
                    ("path", json!(target.display().to_string())),
                    ("connections", json!(written)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!("Exported {} connections to {}", written, target.display());
            }
        },
        records => {
            print_records_header(
                &store,
                "export",
                &format!("status=ok connections={} path={}", written, target.display()),
            );
        }
    )
}
