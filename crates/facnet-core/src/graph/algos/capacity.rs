use crate::error::Result;
use crate::graph::algos::dijkstra::Frontier;
use crate::graph::algos::shared::{validate_weights, NodeIndex};
use crate::graph::types::{NearestFacility, NearestOutcome, NodeId};
use crate::graph::NetworkProvider;

/// Closest facility (by connection distance) whose capacity is at least
/// `min_capacity`.
///
/// Runs the Dijkstra frontier from `start` and stops at the first popped
/// facility that qualifies; the start facility itself qualifies at
/// distance zero.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn nearest_with_capacity(
    provider: &dyn NetworkProvider,
    start: NodeId,
    min_capacity: i64,
) -> Result<NearestOutcome> {
    let index = NodeIndex::build(provider);
    let start_pos = index.locate(provider, start)?;
    validate_weights(provider, &index)?;

    let mut frontier = Frontier::new(provider, &index, start_pos);
    while let Some(entry) = frontier.pop() {
        let id = index.id(entry.position);
        if let Some(capacity) = provider.node_capacity(id) {
            if capacity >= min_capacity {
                tracing::debug!(found = %id, capacity, distance = entry.distance.value(), "capacity_match");
                return Ok(NearestOutcome::Found(NearestFacility {
                    id,
                    capacity,
                    distance: entry.distance,
                }));
            }
        }
        frontier.relax(entry);
    }

    tracing::debug!("no_suitable_facility");
    Ok(NearestOutcome::NoSuitableNode)
}
