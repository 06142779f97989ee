//! `facnet cycle` - cycle detection
//!
//! Directed unless asked otherwise; stores configured as symmetric default
//! to undirected, since every connection there has a mirror.

use facnet_core::error::Result;
use facnet_core::graph::{has_directed_cycle, has_undirected_cycle};
use serde_json::json;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

pub fn execute(ctx: &CommandContext, directed: bool, undirected: bool) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let use_undirected = undirected || (!directed && store.config().symmetric);
    let (semantics, found) = if use_undirected {
        ("undirected", has_undirected_cycle(&network))
    } else {
        ("directed", has_directed_cycle(&network))
    };
    tracing::debug!(semantics, found, "cycle_check");
    trace_command!(cli, ctx.start, "detect_cycle");

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({ "semantics": semantics, "has_cycle": found }))
        },
        human => {
            if found {
                println!("Cycle detected ({})", semantics);
            } else {
                println!("No cycle ({})", semantics);
            }
        },
        records => {
            print_records_header(
                &store,
                "cycle",
                &format!("semantics={} has_cycle={}", semantics, found),
            );
        }
    )
}
