//! `facnet facility` commands

use facnet_core::bail_usage;
use facnet_core::error::Result;
use facnet_core::graph::network::FacilityUpdate;
use facnet_core::graph::{Facility, NodeId};
use facnet_core::store::NetworkStore;
use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    facility_record, output_by_format_result, print_json, print_json_status, print_records_header,
};

/// Fields for a facility being registered
pub struct NewFacility<'a> {
    pub id: NodeId,
    pub name: &'a str,
    pub district: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: i64,
}

pub fn add(ctx: &CommandContext, new: NewFacility) -> Result<()> {
    let (store, mut network) = ctx.load_network()?;

    let mut facility = Facility::new(new.id, new.name, new.capacity);
    facility.district = new.district.to_string();
    facility.latitude = new.latitude;
    facility.longitude = new.longitude;

    network.add_facility(facility.clone())?;
    store.save(&network)?;

    report_facility(ctx, &store, "facility.add", "Added", &facility)
}

pub fn edit(ctx: &CommandContext, id: NodeId, update: FacilityUpdate) -> Result<()> {
    if update.name.is_none()
        && update.district.is_none()
        && update.latitude.is_none()
        && update.longitude.is_none()
        && update.capacity.is_none()
    {
        bail_usage!("nothing to change: pass at least one of --name, --district, --lat, --lon, --capacity");
    }

    let (store, mut network) = ctx.load_network()?;

    let facility = network.update_facility(id, update)?.clone();
    store.save(&network)?;

    report_facility(ctx, &store, "facility.edit", "Updated", &facility)
}

pub fn list(ctx: &CommandContext) -> Result<()> {
    let (store, network) = ctx.load_network()?;
    let cli = ctx.cli;

    output_by_format_result!(cli.format,
        json => {
            let facilities: Vec<_> = network.facilities().collect();
            print_json(&json!(facilities))
        },
        human => {
            if network.is_empty() {
                if !cli.quiet {
                    println!("No facilities");
                }
            } else {
                for f in network.facilities() {
                    let district = if f.district.is_empty() {
                        String::new()
                    } else {
                        format!(" [{}]", f.district)
                    };
                    println!("{:>4}  {}{}  capacity {}", f.id, f.name, district, f.capacity);
                }
            }
        },
        records => {
            print_records_header(&store, "facility.list", &format!("count={}", network.len()));
            for f in network.facilities() {
                println!("{}", facility_record(f));
            }
        }
    )
}

pub fn remove(ctx: &CommandContext, id: NodeId) -> Result<()> {
    let (store, mut network) = ctx.load_network()?;
    let cli = ctx.cli;

    let (facility, dropped) = network.remove_facility(id)?;
    store.save(&network)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                &[
                    ("removed", json!(facility)),
                    ("connections_removed", json!(dropped)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!(
                    "Removed facility {} {} ({} connections)",
                    facility.id, facility.name, dropped
                );
            }
        },
        records => {
            print_records_header(
                &store,
                "facility.remove",
                &format!("status=ok id={} connections_removed={}", facility.id, dropped),
            );
        }
    )
}

fn report_facility(
    ctx: &CommandContext,
    store: &NetworkStore,
    mode: &str,
    verb: &str,
    facility: &Facility,
) -> Result<()> {
    let cli = ctx.cli;
    output_by_format_result!(cli.format,
        json => {
            print_json_status("ok", &[("facility", json!(facility))])
        },
        human => {
            if !cli.quiet {
                println!("{} facility {} {}", verb, facility.id, facility.name);
            }
        },
        records => {
            print_records_header(store, mode, "status=ok");
            println!("{}", facility_record(facility));
        }
    )
}
