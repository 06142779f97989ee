use crate::graph::network::Network;
use crate::graph::types::{Connection, NodeId};

/// Read-only view of a facility network consumed by the routing algorithms.
///
/// Implementors own the records; algorithms only read through this trait for
/// the duration of a single query.
pub trait NetworkProvider {
    fn node_exists(&self, id: NodeId) -> bool;

    /// Capacity of a registered facility, `None` if the id is unknown
    fn node_capacity(&self, id: NodeId) -> Option<i64>;

    fn node_display_name(&self, id: NodeId) -> Option<&str>;

    /// Outgoing connections of `id`; empty for unknown ids
    fn edges_from(&self, id: NodeId) -> &[Connection];

    /// Registered ids in registration order
    fn node_ids(&self) -> Vec<NodeId>;
}

impl NetworkProvider for Network {
    fn node_exists(&self, id: NodeId) -> bool {
        self.has_node(id)
    }

    fn node_capacity(&self, id: NodeId) -> Option<i64> {
        self.facility(id).map(|f| f.capacity)
    }

    fn node_display_name(&self, id: NodeId) -> Option<&str> {
        self.facility(id).map(|f| f.name.as_str())
    }

    fn edges_from(&self, id: NodeId) -> &[Connection] {
        self.neighbors(id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.facilities().map(|f| f.id).collect()
    }
}
