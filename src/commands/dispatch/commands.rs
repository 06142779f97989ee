//! Routes each parsed subcommand to its implementation

use facnet_core::error::Result;
use facnet_core::graph::NodeId;

use crate::cli::{Commands, FacilityCommands, LinkCommands};
use crate::commands;

use super::command::{Command, CommandContext};
use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => commands::init::execute(ctx.cli, ctx.root),
            Commands::Facility { command } => execute_facility(ctx, command),
            Commands::Link { command } => execute_link(ctx, command),
            Commands::Export { output } => {
                commands::export::execute(ctx, output.as_deref())
            }
            Commands::Path { from, to } => {
                commands::path::execute(ctx, NodeId(*from), NodeId(*to))
            }
            Commands::Bfs { start } => commands::bfs::execute(ctx, NodeId(*start)),
            Commands::Cycle {
                directed,
                undirected,
            } => commands::cycle::execute(ctx, *directed, *undirected),
            Commands::AllPairs { from, to } => {
                commands::all_pairs::execute(ctx, from.map(NodeId), to.map(NodeId))
            }
            Commands::Mst { root } => commands::mst::execute(ctx, root.map(NodeId)),
            Commands::Route {
                start,
                min_capacity,
            } => commands::route::execute(ctx, NodeId(*start), *min_capacity),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

fn execute_facility(ctx: &CommandContext, command: &FacilityCommands) -> Result<()> {
    use commands::facility;

    match command {
        FacilityCommands::Add {
            id,
            name,
            district,
            lat,
            lon,
            capacity,
        } => facility::add(
            ctx,
            facility::NewFacility {
                id: NodeId(*id),
                name,
                district,
                latitude: *lat,
                longitude: *lon,
                capacity: *capacity,
            },
        ),
        FacilityCommands::Edit {
            id,
            name,
            district,
            lat,
            lon,
            capacity,
        } => facility::edit(
            ctx,
            NodeId(*id),
            facnet_core::graph::network::FacilityUpdate {
                name: name.clone(),
                district: district.clone(),
                latitude: *lat,
                longitude: *lon,
                capacity: *capacity,
            },
        ),
        FacilityCommands::List => facility::list(ctx),
        FacilityCommands::Remove { id } => facility::remove(ctx, NodeId(*id)),
    }
}

fn execute_link(ctx: &CommandContext, command: &LinkCommands) -> Result<()> {
    use commands::link;

    match command {
        LinkCommands::Add {
            from,
            to,
            distance,
            time,
            label,
            both,
        } => link::add(
            ctx,
            facnet_core::graph::Connection::new(*from, *to, *distance)
                .with_time(*time)
                .with_label(label.as_str()),
            *both,
        ),
        LinkCommands::Edit {
            from,
            to,
            distance,
            time,
            label,
        } => link::edit(
            ctx,
            NodeId(*from),
            NodeId(*to),
            facnet_core::graph::network::ConnectionUpdate {
                distance: *distance,
                time: *time,
                label: label.clone(),
            },
        ),
        LinkCommands::List => link::list(ctx),
        LinkCommands::Remove { from, to } => link::remove(ctx, NodeId(*from), NodeId(*to)),
    }
}
