//! `facnet mst` - minimum spanning tree

use facnet_core::error::Result;
use facnet_core::graph::{minimum_spanning_tree, Distance, NodeId, SpanningOutcome};
use serde_json::json;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{label, output_by_format_result, print_json, print_records_header};

pub fn execute(ctx: &CommandContext, root: Option<NodeId>) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let outcome = minimum_spanning_tree(&network, root)?;
    trace_command!(cli, ctx.start, "minimum_spanning_tree");

    output_by_format_result!(cli.format,
        json => {
            print_json(&json!(outcome))
        },
        human => {
            match &outcome {
                SpanningOutcome::Tree(tree) => {
                    println!("Spanning tree from {}", label(&network, tree.root));
                    for edge in &tree.edges {
                        println!(
                            "  {} -> {}  {} km",
                            edge.from,
                            edge.to,
                            Distance::new(edge.weight)
                        );
                    }
                    println!("Total: {} km", tree.total_weight);
                }
                SpanningOutcome::EmptyNetwork => println!("Network is empty"),
            }
        },
        records => {
            match &outcome {
                SpanningOutcome::Tree(tree) => {
                    print_records_header(
                        &store,
                        "mst",
                        &format!(
                            "root={} status=tree edges={} total={}",
                            tree.root,
                            tree.edges.len(),
                            tree.total_weight
                        ),
                    );
                    for edge in &tree.edges {
                        println!("E {} {} {}", edge.from, edge.to, Distance::new(edge.weight));
                    }
                }
                SpanningOutcome::EmptyNetwork => {
                    print_records_header(&store, "mst", "status=empty_network");
                }
            }
        }
    )
}
