use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a facility in the network
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Accumulated travel distance along a path (kilometres).
///
/// Ordering uses `f64::total_cmp`, so distances can key a priority queue.
/// "Not reached yet" is modelled as `Option<Distance>::None`, never as a
/// large sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(km: f64) -> Self {
        Distance(km)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Distance {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<f64> for Distance {
    fn from(km: f64) -> Self {
        Distance(km)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::records::format_distance(self.0))
    }
}

/// A facility (network node)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: NodeId,
    pub name: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: i64,
}

impl Facility {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, capacity: i64) -> Self {
        Facility {
            id: id.into(),
            name: name.into(),
            district: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            capacity,
        }
    }
}

/// A directed connection (arc) between two facilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    /// Distance in kilometres, the weight used by every routing query
    pub distance: f64,
    /// Travel time in minutes
    pub time: u32,
    pub label: String,
}

impl Connection {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, distance: f64) -> Self {
        Connection {
            from: from.into(),
            to: to.into(),
            distance,
            time: 0,
            label: String::new(),
        }
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = minutes;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The same connection travelled in the opposite direction
    pub fn reversed(&self) -> Self {
        Connection {
            from: self.to,
            to: self.from,
            distance: self.distance,
            time: self.time,
            label: self.label.clone(),
        }
    }
}

/// Result of a single-source shortest path query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found {
        /// Facility ids from start to end, inclusive
        path: Vec<NodeId>,
        distance: Distance,
    },
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }
}

/// The facility selected by the capacity-constrained router
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestFacility {
    pub id: NodeId,
    pub capacity: i64,
    pub distance: Distance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NearestOutcome {
    Found(NearestFacility),
    NoSuitableNode,
}

/// An arc selected into the spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpanningEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub root: NodeId,
    /// Edges in selection order
    pub edges: Vec<SpanningEdge>,
    pub total_weight: Distance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpanningOutcome {
    Tree(SpanningTree),
    EmptyNetwork,
}
