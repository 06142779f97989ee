//! CLI argument parsing for facnet
//!
//! Global flags: --root, --store, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod facility;
pub mod format;
pub mod link;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use facility::FacilityCommands;
pub use facnet_core::format::OutputFormat;
pub use link::LinkCommands;
use parse::parse_output_format;

/// facnet - routing over a network of facilities
#[derive(Parser, Debug)]
#[command(name = "facnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new facnet store
    Init,

    /// Manage facilities
    Facility {
        #[command(subcommand)]
        command: FacilityCommands,
    },

    /// Manage connections between facilities
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },

    /// Write the relationship table (all connections) to a CSV file
    Export {
        /// Output file (default: relationship_table.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Shortest path between two facilities
    Path {
        /// Start facility id
        from: u32,

        /// Destination facility id
        to: u32,
    },

    /// Breadth-first visit order from a facility
    Bfs {
        /// Start facility id
        start: u32,
    },

    /// Report whether the network contains a cycle
    Cycle {
        /// Follow connections in their stored direction
        #[arg(long, conflicts_with = "undirected")]
        directed: bool,

        /// Treat every connection as two-way
        #[arg(long)]
        undirected: bool,
    },

    /// Shortest distances between every pair of facilities
    AllPairs {
        /// Only report distances from this facility
        #[arg(long)]
        from: Option<u32>,

        /// Only report the distance to this facility (requires --from)
        #[arg(long, requires = "from")]
        to: Option<u32>,
    },

    /// Minimum spanning tree of the facilities reachable from a root
    Mst {
        /// Root facility id (default: first registered facility)
        #[arg(long)]
        root: Option<u32>,
    },

    /// Nearest facility whose capacity meets a threshold
    Route {
        /// Start facility id
        start: u32,

        /// Minimum capacity the destination must have
        #[arg(long)]
        min_capacity: i64,
    },
}
