//! `facnet path` - shortest path between two facilities

use facnet_core::error::Result;
use facnet_core::graph::{shortest_path, NodeId, PathOutcome};
use serde_json::json;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{
    label, output_by_format_result, print_json, print_records_header, quoted_name,
};

pub fn execute(ctx: &CommandContext, from: NodeId, to: NodeId) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let outcome = shortest_path(&network, from, to)?;
    trace_command!(cli, ctx.start, "shortest_path");

    output_by_format_result!(cli.format,
        json => {
            let mut value = json!({ "from": from, "to": to });
            if let (Some(obj), serde_json::Value::Object(result)) =
                (value.as_object_mut(), json!(outcome))
            {
                obj.extend(result);
            }
            print_json(&value)
        },
        human => {
            match &outcome {
                PathOutcome::Found { path, distance } => {
                    let hops: Vec<String> = path.iter().map(|id| id.to_string()).collect();
                    println!("{}", hops.join(" -> "));
                    if !cli.quiet {
                        for id in path {
                            println!("  {}", label(&network, *id));
                        }
                    }
                    println!("Distance: {} km", distance);
                }
                PathOutcome::NoPath => println!("No path from {} to {}", from, to),
            }
        },
        records => {
            match &outcome {
                PathOutcome::Found { path, distance } => {
                    print_records_header(
                        &store,
                        "path",
                        &format!(
                            "from={} to={} status=found hops={} distance={}",
                            from,
                            to,
                            path.len() - 1,
                            distance
                        ),
                    );
                    for id in path {
                        println!("N {} {}", id, quoted_name(&network, *id));
                    }
                }
                PathOutcome::NoPath => {
                    print_records_header(
                        &store,
                        "path",
                        &format!("from={} to={} status=no_path", from, to),
                    );
                }
            }
        }
    )
}
