//! Shared output helpers for commands
//!
//! Records output is line oriented: one `H` header line per command
//! followed by typed body lines (`F` facility, `C` connection, `N` path or
//! visit node, `E` tree edge, `D` distance).

use facnet_core::error::Result;
use facnet_core::graph::{Facility, NetworkProvider, NodeId};
use facnet_core::records::{escape_quotes, path_relative_to_cwd};
use facnet_core::store::NetworkStore;
use serde_json::json;

pub use crate::output_by_format_result;

/// Print a JSON value on stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with extra fields
pub fn print_json_status(status: &str, extra_fields: &[(&str, serde_json::Value)]) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print the records header: `H facnet=1 records=1 store=<path> mode=<mode> ...`
pub fn print_records_header(store: &NetworkStore, mode: &str, fields: &str) {
    let mut line = format!(
        "H facnet=1 records=1 store={} mode={}",
        path_relative_to_cwd(store.root()),
        mode
    );
    if !fields.is_empty() {
        line.push(' ');
        line.push_str(fields);
    }
    println!("{}", line);
}

/// Quoted facility name for records lines; empty when the id is unknown
pub fn quoted_name(network: &dyn NetworkProvider, id: NodeId) -> String {
    let name = network.node_display_name(id).unwrap_or("");
    format!("\"{}\"", escape_quotes(name))
}

/// `<id> <name>` for human output
pub fn label(network: &dyn NetworkProvider, id: NodeId) -> String {
    match network.node_display_name(id) {
        Some(name) => format!("{} {}", id, name),
        None => id.to_string(),
    }
}

/// Records line for a facility
pub fn facility_record(facility: &Facility) -> String {
    format!(
        "F {} capacity={} district=\"{}\" lat={} lon={} \"{}\"",
        facility.id,
        facility.capacity,
        escape_quotes(&facility.district),
        facility.latitude,
        facility.longitude,
        escape_quotes(&facility.name)
    )
}
