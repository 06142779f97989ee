use std::cmp::Ordering;

use crate::error::Result;
use crate::graph::algos::shared::{validate_weights, NodeIndex};
use crate::graph::types::{Distance, NodeId};
use crate::graph::NetworkProvider;

/// All-pairs shortest distances over the registered facilities.
///
/// Cells are `None` where no path exists.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    index: NodeIndex,
    cells: Vec<Option<Distance>>,
}

impl DistanceMatrix {
    /// Shortest distance `from -> to`; `Ok(None)` when unreachable
    pub fn distance(&self, from: NodeId, to: NodeId) -> Result<Option<Distance>> {
        let i = self.index.require(from)?;
        let j = self.index.require(to)?;
        Ok(self.cell(i, j))
    }

    /// Facility ids labelling rows and columns, in registration order
    pub fn ids(&self) -> &[NodeId] {
        self.index.ids()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Distances from `from` to every facility, in `ids()` order
    pub fn row(&self, from: NodeId) -> Result<Vec<Option<Distance>>> {
        let i = self.index.require(from)?;
        let n = self.len();
        Ok(self.cells[i * n..(i + 1) * n].to_vec())
    }

    /// Every reachable ordered pair with its distance
    pub fn reachable_pairs(&self) -> impl Iterator<Item = (NodeId, NodeId, Distance)> + '_ {
        let n = self.len();
        self.cells.iter().enumerate().filter_map(move |(cell, dist)| {
            dist.map(|d| (self.index.id(cell / n), self.index.id(cell % n), d))
        })
    }

    fn cell(&self, i: usize, j: usize) -> Option<Distance> {
        self.cells[i * self.len() + j]
    }
}

/// Floyd-Warshall over live facility ids only
#[tracing::instrument(skip(provider))]
pub fn all_pairs(provider: &dyn NetworkProvider) -> Result<DistanceMatrix> {
    let index = NodeIndex::build(provider);
    validate_weights(provider, &index)?;

    let n = index.len();
    let mut cells: Vec<Option<Distance>> = vec![None; n * n];

    for i in 0..n {
        cells[i * n + i] = Some(Distance::ZERO);
        for conn in provider.edges_from(index.id(i)) {
            let Some(j) = index.position(conn.to) else {
                continue;
            };
            let weight = Distance::new(conn.distance);
            let slot = &mut cells[i * n + j];
            if slot.is_none_or(|best| weight.total_cmp(&best) == Ordering::Less) {
                *slot = Some(weight);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(via_k) = cells[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(k_to_j) = cells[k * n + j] else {
                    continue;
                };
                let candidate = via_k + k_to_j;
                let slot = &mut cells[i * n + j];
                if slot.is_none_or(|best| candidate.total_cmp(&best) == Ordering::Less) {
                    *slot = Some(candidate);
                }
            }
        }
    }

    tracing::debug!(facilities = n, "all_pairs_complete");
    Ok(DistanceMatrix { index, cells })
}
