//! Facility subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum FacilityCommands {
    /// Register a new facility
    Add {
        /// Facility id
        #[arg(long)]
        id: u32,

        /// Display name
        #[arg(long)]
        name: String,

        /// District or region
        #[arg(long, default_value = "")]
        district: String,

        /// Latitude
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lon: f64,

        /// Capacity available at the facility
        #[arg(long, allow_negative_numbers = true)]
        capacity: i64,
    },

    /// Change fields of an existing facility
    Edit {
        /// Facility id
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        district: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        capacity: Option<i64>,
    },

    /// List facilities in registration order
    List,

    /// Remove a facility and every connection touching it
    Remove {
        /// Facility id
        id: u32,
    },
}
