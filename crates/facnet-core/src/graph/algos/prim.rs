use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::algos::shared::NodeIndex;
use crate::graph::types::{Distance, NodeId, SpanningEdge, SpanningOutcome, SpanningTree};
use crate::graph::NetworkProvider;

/// Candidate connection leaving the current tree
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: Distance,
    from: usize,
    to: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

fn push_candidates(
    provider: &dyn NetworkProvider,
    index: &NodeIndex,
    from: usize,
    in_tree: &[bool],
    heap: &mut BinaryHeap<Reverse<Candidate>>,
) {
    for conn in provider.edges_from(index.id(from)) {
        let Some(to) = index.position(conn.to) else {
            continue;
        };
        if !in_tree[to] {
            heap.push(Reverse(Candidate {
                weight: Distance::new(conn.distance),
                from,
                to,
            }));
        }
    }
}

/// Minimum spanning tree grown from `root` (Prim).
///
/// The root defaults to the first registered facility. Connections are
/// followed in their stored direction, so only facilities reachable from
/// the root are spanned.
#[tracing::instrument(skip(provider), fields(root = ?root))]
pub fn minimum_spanning_tree(
    provider: &dyn NetworkProvider,
    root: Option<NodeId>,
) -> Result<SpanningOutcome> {
    let index = NodeIndex::build(provider);
    let root_pos = match root {
        Some(id) => index.locate(provider, id)?,
        None if index.is_empty() => return Ok(SpanningOutcome::EmptyNetwork),
        None => 0,
    };

    let mut in_tree = vec![false; index.len()];
    let mut heap = BinaryHeap::new();
    let mut edges = Vec::new();
    let mut total_weight = Distance::ZERO;

    in_tree[root_pos] = true;
    push_candidates(provider, &index, root_pos, &in_tree, &mut heap);

    while let Some(Reverse(candidate)) = heap.pop() {
        if in_tree[candidate.to] {
            continue;
        }
        in_tree[candidate.to] = true;
        total_weight += candidate.weight;
        edges.push(SpanningEdge {
            from: index.id(candidate.from),
            to: index.id(candidate.to),
            weight: candidate.weight.value(),
        });
        push_candidates(provider, &index, candidate.to, &in_tree, &mut heap);
    }

    tracing::debug!(
        edges = edges.len(),
        total = total_weight.value(),
        "spanning_tree_complete"
    );
    Ok(SpanningOutcome::Tree(SpanningTree {
        root: index.id(root_pos),
        edges,
        total_weight,
    }))
}
