//! Link subcommands for managing connections between facilities

use clap::Subcommand;

use super::parse::parse_distance;

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Add a connection
    Add {
        /// Source facility id
        from: u32,

        /// Target facility id
        to: u32,

        /// Distance in kilometres
        #[arg(long, value_parser = parse_distance)]
        distance: f64,

        /// Travel time in minutes
        #[arg(long)]
        time: u32,

        /// Free-text description
        #[arg(long, default_value = "")]
        label: String,

        /// Also add the reverse connection
        #[arg(long)]
        both: bool,
    },

    /// Change an existing connection
    Edit {
        /// Source facility id
        from: u32,

        /// Target facility id
        to: u32,

        #[arg(long, value_parser = parse_distance)]
        distance: Option<f64>,

        #[arg(long)]
        time: Option<u32>,

        #[arg(long)]
        label: Option<String>,
    },

    /// List all connections grouped by source
    List,

    /// Remove a connection
    Remove {
        /// Source facility id
        from: u32,

        /// Target facility id
        to: u32,
    },
}
