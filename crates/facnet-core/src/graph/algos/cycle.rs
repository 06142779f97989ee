use std::collections::HashSet;

use crate::graph::algos::shared::NodeIndex;
use crate::graph::NetworkProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Finished,
}

/// Whether the connections, read as directed arcs, contain a cycle.
///
/// A pair of facilities connected in both directions is a directed cycle;
/// see [`has_undirected_cycle`] for networks inserted symmetrically.
#[tracing::instrument(skip(provider))]
pub fn has_directed_cycle(provider: &dyn NetworkProvider) -> bool {
    let index = NodeIndex::build(provider);
    let mut marks = vec![Mark::Unvisited; index.len()];
    // (position, next connection to examine)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..index.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnPath;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let current = frame.0;
            let edges = provider.edges_from(index.id(current));

            if frame.1 >= edges.len() {
                marks[current] = Mark::Finished;
                stack.pop();
                continue;
            }

            let to = edges[frame.1].to;
            frame.1 += 1;

            let Some(next) = index.position(to) else {
                continue;
            };
            match marks[next] {
                Mark::OnPath => {
                    tracing::debug!(at = %to, "directed_cycle_found");
                    return true;
                }
                Mark::Unvisited => {
                    marks[next] = Mark::OnPath;
                    stack.push((next, 0));
                }
                Mark::Finished => {}
            }
        }
    }

    false
}

/// Whether the connections, read as undirected links, contain a cycle.
///
/// Reciprocal and parallel arcs between the same two facilities collapse
/// into a single link, so a network inserted in both directions only
/// reports rings of three or more facilities. A self-loop is a cycle.
/// Only meaningful when connections are known to be symmetric.
#[tracing::instrument(skip(provider))]
pub fn has_undirected_cycle(provider: &dyn NetworkProvider) -> bool {
    let index = NodeIndex::build(provider);
    let mut sets = DisjointSets::new(index.len());
    let mut links: HashSet<(usize, usize)> = HashSet::new();

    for &id in index.ids() {
        let Some(a) = index.position(id) else {
            continue;
        };
        for conn in provider.edges_from(id) {
            let Some(b) = index.position(conn.to) else {
                continue;
            };
            if a == b {
                return true;
            }
            if !links.insert((a.min(b), a.max(b))) {
                continue;
            }
            if !sets.union(a, b) {
                tracing::debug!(from = %id, to = %conn.to, "undirected_cycle_found");
                return true;
            }
        }
    }

    false
}

struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        DisjointSets {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}
