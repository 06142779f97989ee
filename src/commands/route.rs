//! `facnet route` - nearest facility meeting a capacity threshold

use facnet_core::error::Result;
use facnet_core::graph::{nearest_with_capacity, NearestOutcome, NodeId};
use serde_json::json;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{
    label, output_by_format_result, print_json, print_records_header, quoted_name,
};

pub fn execute(ctx: &CommandContext, start: NodeId, min_capacity: i64) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    let outcome = nearest_with_capacity(&network, start, min_capacity)?;
    trace_command!(cli, ctx.start, "nearest_with_capacity");

    output_by_format_result!(cli.format,
        json => {
            let mut value = json!({ "start": start, "min_capacity": min_capacity });
            if let (Some(obj), serde_json::Value::Object(result)) =
                (value.as_object_mut(), json!(outcome))
            {
                obj.extend(result);
            }
            print_json(&value)
        },
        human => {
            match &outcome {
                NearestOutcome::Found(found) => println!(
                    "Nearest facility with capacity >= {}: {} (capacity {}) at {} km",
                    min_capacity,
                    label(&network, found.id),
                    found.capacity,
                    found.distance
                ),
                NearestOutcome::NoSuitableNode => println!(
                    "No facility with capacity >= {} reachable from {}",
                    min_capacity, start
                ),
            }
        },
        records => {
            let fields = match &outcome {
                NearestOutcome::Found(found) => format!(
                    "start={} min_capacity={} status=found id={} capacity={} distance={}",
                    start, min_capacity, found.id, found.capacity, found.distance
                ),
                NearestOutcome::NoSuitableNode => format!(
                    "start={} min_capacity={} status=no_suitable_node",
                    start, min_capacity
                ),
            };
            print_records_header(&store, "route", &fields);
            if let NearestOutcome::Found(found) = &outcome {
                println!("N {} {}", found.id, quoted_name(&network, found.id));
            }
        }
    )
}
