use std::collections::VecDeque;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::shared::NodeIndex;
use crate::graph::types::NodeId;
use crate::graph::NetworkProvider;

/// A facility reached by breadth-first visitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BfsVisit {
    pub id: NodeId,
    /// Number of connections from the start facility
    pub hops: u32,
}

/// Breadth-first visitation from `start` following outgoing connections.
///
/// Each reachable facility appears exactly once, ordered by non-decreasing
/// hop count; unreachable facilities are left out.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_traverse(provider: &dyn NetworkProvider, start: NodeId) -> Result<Vec<BfsVisit>> {
    let index = NodeIndex::build(provider);
    let start_pos = index.locate(provider, start)?;

    let mut visited = vec![false; index.len()];
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();
    let mut order = Vec::new();

    visited[start_pos] = true;
    queue.push_back((start_pos, 0));

    while let Some((current, hops)) = queue.pop_front() {
        let id = index.id(current);
        order.push(BfsVisit { id, hops });

        for conn in provider.edges_from(id) {
            let Some(next) = index.position(conn.to) else {
                continue;
            };
            if !visited[next] {
                visited[next] = true;
                queue.push_back((next, hops + 1));
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_complete");
    Ok(order)
}

/// Visitation order only; see [`bfs_traverse`]
pub fn bfs_order(provider: &dyn NetworkProvider, start: NodeId) -> Result<Vec<NodeId>> {
    Ok(bfs_traverse(provider, start)?
        .into_iter()
        .map(|visit| visit.id)
        .collect())
}
