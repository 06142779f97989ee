//! `facnet link` commands
//!
//! With `symmetric = true` in the store config every change is mirrored on
//! the reverse connection.

use facnet_core::bail_usage;
use facnet_core::error::{FacnetError, Result};
use facnet_core::graph::network::ConnectionUpdate;
use facnet_core::graph::{Connection, Network, NodeId};
use facnet_core::records::escape_quotes;
use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    output_by_format_result, print_json, print_json_status, print_records_header,
};

pub fn add(ctx: &CommandContext, connection: Connection, both: bool) -> Result<()> {
    let (store, mut network) = ctx.load_network()?;
    let cli = ctx.cli;

    // An existing reverse arc already makes the pair two-way
    let reverse_exists = network
        .neighbors(connection.to)
        .iter()
        .any(|c| c.to == connection.from);
    let wants_mirror = (both || store.config().symmetric) && connection.from != connection.to;
    let mirrored = wants_mirror && !reverse_exists;
    if wants_mirror && reverse_exists {
        tracing::debug!(
            from = %connection.to,
            to = %connection.from,
            "reverse connection exists, not mirrored"
        );
    }
    let reverse = connection.reversed();

    network.add_connection(connection.clone())?;
    if mirrored {
        network.add_connection(reverse.clone())?;
    }
    store.save(&network)?;

    let added: Vec<&Connection> = if mirrored {
        vec![&connection, &reverse]
    } else {
        vec![&connection]
    };

    output_by_format_result!(cli.format,
        json => {
            print_json_status("ok", &[("added", json!(added))])
        },
        human => {
            if !cli.quiet {
                for c in &added {
                    println!("Added connection {} -> {} ({} km)", c.from, c.to, c.distance);
                }
            }
        },
        records => {
            print_records_header(&store, "link.add", &format!("status=ok added={}", added.len()));
            for c in &added {
                println!("{}", connection_record(c));
            }
        }
    )
}

pub fn edit(ctx: &CommandContext, from: NodeId, to: NodeId, update: ConnectionUpdate) -> Result<()> {
    if update.distance.is_none() && update.time.is_none() && update.label.is_none() {
        bail_usage!("nothing to change: pass at least one of --distance, --time, --label");
    }

    let (store, mut network) = ctx.load_network()?;
    let cli = ctx.cli;

    let mut updated = network.update_connection(from, to, update.clone())?;
    if store.config().symmetric && from != to {
        updated += tolerate_missing(network.update_connection(to, from, update))?;
    }
    store.save(&network)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                &[("from", json!(from)), ("to", json!(to)), ("updated", json!(updated))],
            )
        },
        human => {
            if !cli.quiet {
                println!("Updated {} connection(s) {} -> {}", updated, from, to);
            }
        },
        records => {
            print_records_header(
                &store,
                "link.edit",
                &format!("status=ok from={} to={} updated={}", from, to, updated),
            );
        }
    )
}

pub fn list(ctx: &CommandContext) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    output_by_format_result!(cli.format,
        json => {
            let connections: Vec<_> = network.connections().collect();
            print_json(&json!(connections))
        },
        human => {
            print_connections_human(&network, cli.quiet);
        },
        records => {
            print_records_header(
                &store,
                "link.list",
                &format!("count={}", network.connection_count()),
            );
            for c in network.connections() {
                println!("{}", connection_record(c));
            }
        }
    )
}

pub fn remove(ctx: &CommandContext, from: NodeId, to: NodeId) -> Result<()> {
    let (store, mut network) = ctx.load_network()?;
    let cli = ctx.cli;

    let mut removed = network.remove_connection(from, to)?;
    if store.config().symmetric && from != to {
        removed += tolerate_missing(network.remove_connection(to, from))?;
    }
    store.save(&network)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                &[("from", json!(from)), ("to", json!(to)), ("removed", json!(removed))],
            )
        },
        human => {
            if !cli.quiet {
                println!("Removed {} connection(s) {} -> {}", removed, from, to);
            }
        },
        records => {
            print_records_header(
                &store,
                "link.remove",
                &format!("status=ok from={} to={} removed={}", from, to, removed),
            );
        }
    )
}

/// The mirrored arc of a symmetric store may have been removed by hand
fn tolerate_missing(result: Result<usize>) -> Result<usize> {
    match result {
        Err(FacnetError::NotFound { context, value }) => {
            tracing::warn!(%context, %value, "reverse connection missing");
            Ok(0)
        }
        other => other,
    }
}

fn print_connections_human(network: &Network, quiet: bool) {
    if network.connection_count() == 0 {
        if !quiet {
            println!("No connections");
        }
        return;
    }
    for c in network.connections() {
        let label = if c.label.is_empty() {
            String::new()
        } else {
            format!("  {}", c.label)
        };
        println!(
            "{:>4} -> {:<4}  {} km  {} min{}",
            c.from, c.to, c.distance, c.time, label
        );
    }
}

fn connection_record(c: &Connection) -> String {
    format!(
        "C {} {} distance={} time={} \"{}\"",
        c.from,
        c.to,
        c.distance,
        c.time,
        escape_quotes(&c.label)
    )
}
