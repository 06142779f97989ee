//! `facnet bfs` - breadth-first visit order

use facnet_core::error::Result;
use facnet_core::graph::algos::bfs_traverse;
use facnet_core::graph::NodeId;
use serde_json::json;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{
    label, output_by_format_result, print_json, print_records_header, quoted_name,
};

pub fn execute(ctx: &CommandContext, start: NodeId) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let visits = bfs_traverse(&network, start)?;
    trace_command!(cli, ctx.start, "bfs_traverse");

    output_by_format_result!(cli.format,
        json => {
            let order: Vec<NodeId> = visits.iter().map(|v| v.id).collect();
            print_json(&json!({
                "start": start,
                "order": order,
                "visits": visits,
            }))
        },
        human => {
            let order: Vec<String> = visits.iter().map(|v| v.id.to_string()).collect();
            println!("{}", order.join(" "));
            if !cli.quiet {
                for visit in &visits {
                    println!("  [{}] {}", visit.hops, label(&network, visit.id));
                }
            }
        },
        records => {
            print_records_header(
                &store,
                "bfs",
                &format!("start={} visited={}", start, visits.len()),
            );
            for visit in &visits {
                println!(
                    "N {} hops={} {}",
                    visit.id,
                    visit.hops,
                    quoted_name(&network, visit.id)
                );
            }
        }
    )
}
