//! Facility network graph and routing operations
//!
//! Provides the graph store and the algorithms that run over it:
//! - BFS visitation and cycle detection
//! - Dijkstra single-source paths and Floyd-Warshall all-pairs distances
//! - Prim's minimum spanning tree
//! - Capacity-constrained nearest facility search
//! - Network provider trait for pluggable data sources

pub mod algos;
pub mod network;
pub mod provider;
pub mod types;

pub use algos::{
    all_pairs, bfs_order, has_directed_cycle, has_undirected_cycle, minimum_spanning_tree,
    nearest_with_capacity, shortest_path, DistanceMatrix,
};
pub use network::Network;
pub use provider::NetworkProvider;
pub use types::{
    Connection, Distance, Facility, NearestFacility, NearestOutcome, NodeId, PathOutcome,
    SpanningEdge, SpanningOutcome, SpanningTree,
};
