//! Fixtures shared by the algorithm tests

use std::collections::{HashMap, HashSet};

use crate::graph::types::{Connection, Facility, NodeId};
use crate::graph::{Network, NetworkProvider};

/// Build a network from `(id, capacity)` facilities and `(from, to, km)` arcs
pub fn network_from(facilities: &[(u32, i64)], arcs: &[(u32, u32, f64)]) -> Network {
    let mut network = Network::new();
    for &(id, capacity) in facilities {
        network
            .add_facility(Facility::new(id, format!("Facility {}", id), capacity))
            .unwrap();
    }
    for &(from, to, km) in arcs {
        network.add_connection(Connection::new(from, to, km)).unwrap();
    }
    network
}

/// The five-facility network used throughout the routing tests:
/// 1->2 (4), 1->3 (1), 3->2 (1), 2->4 (1), 4->5 (2)
pub fn sample_network() -> Network {
    network_from(
        &[(1, 10), (2, 20), (3, 40), (4, 60), (5, 80)],
        &[
            (1, 2, 4.0),
            (1, 3, 1.0),
            (3, 2, 1.0),
            (2, 4, 1.0),
            (4, 5, 2.0),
        ],
    )
}

/// Provider without the store's insertion checks, for feeding algorithms
/// data the store would refuse (negative weights, dangling arcs).
pub struct StaticProvider {
    ids: Vec<NodeId>,
    capacities: HashMap<NodeId, i64>,
    edges: HashMap<NodeId, Vec<Connection>>,
    names: HashMap<NodeId, String>,
    retired: HashSet<NodeId>,
}

impl StaticProvider {
    pub fn new(facilities: &[(u32, i64)], arcs: &[(u32, u32, f64)]) -> Self {
        let mut edges: HashMap<NodeId, Vec<Connection>> = HashMap::new();
        for &(from, to, km) in arcs {
            edges
                .entry(NodeId(from))
                .or_default()
                .push(Connection::new(from, to, km));
        }
        StaticProvider {
            ids: facilities.iter().map(|&(id, _)| NodeId(id)).collect(),
            capacities: facilities
                .iter()
                .map(|&(id, cap)| (NodeId(id), cap))
                .collect(),
            names: facilities
                .iter()
                .map(|&(id, _)| (NodeId(id), format!("Site {}", id)))
                .collect(),
            edges,
            retired: HashSet::new(),
        }
    }

    /// Keep `id` in the id listing but report it as no longer registered
    pub fn retire(mut self, id: u32) -> Self {
        self.retired.insert(NodeId(id));
        self
    }
}

impl NetworkProvider for StaticProvider {
    fn node_exists(&self, id: NodeId) -> bool {
        self.capacities.contains_key(&id) && !self.retired.contains(&id)
    }

    fn node_capacity(&self, id: NodeId) -> Option<i64> {
        self.capacities.get(&id).copied()
    }

    fn node_display_name(&self, id: NodeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    fn edges_from(&self, id: NodeId) -> &[Connection] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.ids.clone()
    }
}
