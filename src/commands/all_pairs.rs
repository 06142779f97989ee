//! `facnet all-pairs` - distances between every pair of facilities

use facnet_core::error::Result;
use facnet_core::graph::{all_pairs, Distance, DistanceMatrix, NodeId};
use facnet_core::store::NetworkStore;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{output_by_format_result, print_json, print_records_header};

pub fn execute(ctx: &CommandContext, from: Option<NodeId>, to: Option<NodeId>) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let matrix = all_pairs(&network)?;
    trace_command!(cli, ctx.start, "all_pairs");

    match (from, to) {
        (Some(from), Some(to)) => {
            let distance = matrix.distance(from, to)?;
            print_single(cli, &store, from, to, distance)
        }
        (Some(from), None) => {
            let row = matrix.row(from)?;
            let cells: Vec<(NodeId, Option<Distance>)> =
                matrix.ids().iter().copied().zip(row).collect();
            print_row(cli, &store, from, &cells)
        }
        _ => print_matrix(cli, &store, &matrix),
    }
}

fn print_single(
    cli: &Cli,
    store: &NetworkStore,
    from: NodeId,
    to: NodeId,
    distance: Option<Distance>,
) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            print_json(&json!({ "from": from, "to": to, "distance": distance }))
        },
        human => {
            match distance {
                Some(d) => println!("Distance {} -> {}: {} km", from, to, d),
                None => println!("No path from {} to {}", from, to),
            }
        },
        records => {
            let fields = match distance {
                Some(d) => format!("from={} to={} status=found distance={}", from, to, d),
                None => format!("from={} to={} status=no_path", from, to),
            };
            print_records_header(store, "all_pairs", &fields);
        }
    )
}

fn print_row(
    cli: &Cli,
    store: &NetworkStore,
    from: NodeId,
    cells: &[(NodeId, Option<Distance>)],
) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let distances: Vec<_> = cells
                .iter()
                .map(|(to, d)| json!({ "to": to, "distance": d }))
                .collect();
            print_json(&json!({ "from": from, "distances": distances }))
        },
        human => {
            for (to, distance) in cells {
                match distance {
                    Some(d) => println!("{} -> {}: {} km", from, to, d),
                    None => println!("{} -> {}: unreachable", from, to),
                }
            }
        },
        records => {
            let reachable = cells.iter().filter(|(_, d)| d.is_some()).count();
            print_records_header(
                store,
                "all_pairs",
                &format!("from={} reachable={}", from, reachable),
            );
            for (to, distance) in cells {
                if let Some(d) = distance {
                    println!("D {} {} {}", from, to, d);
                }
            }
        }
    )
}

fn print_matrix(cli: &Cli, store: &NetworkStore, matrix: &DistanceMatrix) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            let pairs: Vec<_> = matrix
                .reachable_pairs()
                .map(|(from, to, d)| json!({ "from": from, "to": to, "distance": d }))
                .collect();
            print_json(&json!({ "facilities": matrix.ids(), "pairs": pairs }))
        },
        human => {
            print_matrix_human(matrix);
        },
        records => {
            print_records_header(
                store,
                "all_pairs",
                &format!(
                    "facilities={} pairs={}",
                    matrix.len(),
                    matrix.reachable_pairs().count()
                ),
            );
            for (from, to, d) in matrix.reachable_pairs() {
                println!("D {} {} {}", from, to, d);
            }
        }
    )
}

/// Grid with one row per source; `-` marks unreachable cells
fn print_matrix_human(matrix: &DistanceMatrix) {
    if matrix.is_empty() {
        println!("Network is empty");
        return;
    }

    let cell = |d: Option<Distance>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
    let mut header = format!("{:>6}", "");
    for id in matrix.ids() {
        header.push_str(&format!(" {:>8}", id));
    }
    println!("{}", header);

    for &from in matrix.ids() {
        let mut line = format!("{:>6}", from);
        if let Ok(row) = matrix.row(from) {
            for d in row {
                line.push_str(&format!(" {:>8}", cell(d)));
            }
        }
        println!("{}", line);
    }
}
