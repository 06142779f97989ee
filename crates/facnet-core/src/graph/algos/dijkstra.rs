use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::algos::shared::{validate_weights, NodeIndex};
use crate::graph::types::{Distance, NodeId, PathOutcome};
use crate::graph::NetworkProvider;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub position: usize,
    pub distance: Distance,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Tentative-distance table plus min-priority frontier.
///
/// Shared by the single-source path query and the capacity router: callers
/// pop the closest unsettled node, inspect it, then relax its connections.
pub struct Frontier<'a> {
    provider: &'a dyn NetworkProvider,
    index: &'a NodeIndex,
    dist: Vec<Option<Distance>>,
    prev: Vec<Option<usize>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl<'a> Frontier<'a> {
    pub fn new(provider: &'a dyn NetworkProvider, index: &'a NodeIndex, start: usize) -> Self {
        let mut dist = vec![None; index.len()];
        dist[start] = Some(Distance::ZERO);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            position: start,
            distance: Distance::ZERO,
        }));

        Frontier {
            provider,
            index,
            dist,
            prev: vec![None; index.len()],
            heap,
        }
    }

    /// Pop the closest node, skipping entries superseded by a later relaxation
    pub fn pop(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let stale = self.dist[entry.position]
                .is_some_and(|best| entry.distance.total_cmp(&best) == Ordering::Greater);
            if !stale {
                return Some(entry);
            }
        }
        None
    }

    /// Relax every outgoing connection of a popped node
    pub fn relax(&mut self, entry: HeapEntry) {
        let from = self.index.id(entry.position);
        for conn in self.provider.edges_from(from) {
            let Some(to) = self.index.position(conn.to) else {
                tracing::trace!(from = %from, to = %conn.to, "skip_dangling_connection");
                continue;
            };

            let candidate = entry.distance + Distance::new(conn.distance);
            let improves = self.dist[to]
                .is_none_or(|best| candidate.total_cmp(&best) == Ordering::Less);
            if improves {
                self.dist[to] = Some(candidate);
                self.prev[to] = Some(entry.position);
                self.heap.push(Reverse(HeapEntry {
                    position: to,
                    distance: candidate,
                }));
            }
        }
    }

    /// Best known distance to a position, `None` if not reached
    pub fn distance(&self, position: usize) -> Option<Distance> {
        self.dist[position]
    }

    /// Walk predecessors back from `position` to the start
    pub fn path_to(&self, position: usize) -> Vec<NodeId> {
        let mut path = vec![self.index.id(position)];
        let mut current = position;
        while let Some(pred) = self.prev[current] {
            path.push(self.index.id(pred));
            current = pred;
        }
        path.reverse();
        path
    }
}

/// Shortest path from `start` to `end` by connection distance (Dijkstra).
///
/// Every connection weight is checked before the search starts; a negative
/// or non-finite distance is an error rather than a wrong answer.
#[tracing::instrument(skip(provider), fields(start = %start, end = %end))]
pub fn shortest_path(
    provider: &dyn NetworkProvider,
    start: NodeId,
    end: NodeId,
) -> Result<PathOutcome> {
    let index = NodeIndex::build(provider);
    let start_pos = index.locate(provider, start)?;
    let end_pos = index.locate(provider, end)?;
    validate_weights(provider, &index)?;

    let mut frontier = Frontier::new(provider, &index, start_pos);
    while let Some(entry) = frontier.pop() {
        if entry.position == end_pos {
            break;
        }
        frontier.relax(entry);
    }

    match frontier.distance(end_pos) {
        Some(distance) => {
            let path = frontier.path_to(end_pos);
            tracing::debug!(hops = path.len() - 1, distance = distance.value(), "path_found");
            Ok(PathOutcome::Found { path, distance })
        }
        None => {
            tracing::debug!("no_path");
            Ok(PathOutcome::NoPath)
        }
    }
}
