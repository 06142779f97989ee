use std::collections::HashMap;

use crate::error::{FacnetError, Result};
use crate::graph::types::NodeId;
use crate::graph::NetworkProvider;

/// Dense index over the registered facilities of a provider.
///
/// Algorithms size their per-node tables to the live facility count and
/// address them by position, never by raw id.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    ids: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
}

impl NodeIndex {
    pub fn build(provider: &dyn NetworkProvider) -> Self {
        let ids = provider.node_ids();
        let positions = ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();
        NodeIndex { ids, positions }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Position of `id`, or an unknown-node error
    pub fn require(&self, id: NodeId) -> Result<usize> {
        self.position(id).ok_or(FacnetError::UnknownNode { id })
    }

    /// Position of a query endpoint. The provider decides whether the
    /// facility is live; the index only supplies its slot.
    pub fn locate(&self, provider: &dyn NetworkProvider, id: NodeId) -> Result<usize> {
        if !provider.node_exists(id) {
            return Err(FacnetError::UnknownNode { id });
        }
        self.require(id)
    }

    pub fn id(&self, position: usize) -> NodeId {
        self.ids[position]
    }

    /// Ids in registration order
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }
}

/// Reject negative or non-finite connection distances before any relaxation
pub fn validate_weights(provider: &dyn NetworkProvider, index: &NodeIndex) -> Result<()> {
    for &id in index.ids() {
        for conn in provider.edges_from(id) {
            if !conn.distance.is_finite() || conn.distance < 0.0 {
                return Err(FacnetError::NegativeWeight {
                    from: conn.from,
                    to: conn.to,
                    distance: conn.distance,
                });
            }
        }
    }
    Ok(())
}
