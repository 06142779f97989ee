//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first visitation order
//! - `cycle`: Directed and undirected cycle detection
//! - `dijkstra`: Single-source shortest paths and the shared relaxation frontier
//! - `floyd`: All-pairs shortest distances
//! - `prim`: Minimum spanning tree
//! - `capacity`: Nearest facility meeting a capacity threshold
//! - `shared`: Dense node indexing and weight validation

pub mod bfs;
pub mod capacity;
pub mod cycle;
pub mod dijkstra;
pub mod floyd;
pub mod prim;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use bfs::{bfs_order, bfs_traverse, BfsVisit};
pub use capacity::nearest_with_capacity;
pub use cycle::{has_directed_cycle, has_undirected_cycle};
pub use dijkstra::{shortest_path, Frontier, HeapEntry};
pub use floyd::{all_pairs, DistanceMatrix};
pub use prim::minimum_spanning_tree;
pub use shared::{validate_weights, NodeIndex};
