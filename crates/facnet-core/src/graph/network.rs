//! Graph store for the facility network
//!
//! Facilities live in a growable arena in registration order; a map from
//! `NodeId` to arena position gives O(1) lookup. Memory scales with the
//! number of registered facilities, not with the id bound.

use std::collections::HashMap;

use crate::bail_invalid;
use crate::error::{FacnetError, Result};
use crate::graph::types::{Connection, Facility, NodeId};

/// Default inclusive upper bound for facility ids
pub const DEFAULT_MAX_NODE_ID: u32 = 999;

/// Partial update applied by [`Network::update_facility`]
#[derive(Debug, Clone, Default)]
pub struct FacilityUpdate {
    pub name: Option<String>,
    pub district: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: Option<i64>,
}

/// Partial update applied by [`Network::update_connection`]
#[derive(Debug, Clone, Default)]
pub struct ConnectionUpdate {
    pub distance: Option<f64>,
    pub time: Option<u32>,
    pub label: Option<String>,
}

/// The facility network: facilities plus directed connections keyed by source
#[derive(Debug, Clone)]
pub struct Network {
    max_node_id: u32,
    facilities: Vec<Facility>,
    /// Outgoing connections, parallel to `facilities`
    adjacency: Vec<Vec<Connection>>,
    positions: HashMap<NodeId, usize>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    pub fn new() -> Self {
        Self::with_max_node_id(DEFAULT_MAX_NODE_ID)
    }

    pub fn with_max_node_id(max_node_id: u32) -> Self {
        Network {
            max_node_id,
            facilities: Vec::new(),
            adjacency: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn max_node_id(&self) -> u32 {
        self.max_node_id
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn facility(&self, id: NodeId) -> Option<&Facility> {
        self.positions.get(&id).map(|&pos| &self.facilities[pos])
    }

    /// Facilities in registration order
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    /// Outgoing connections of `id`. Unknown or out-of-range ids have none.
    pub fn neighbors(&self, id: NodeId) -> &[Connection] {
        match self.positions.get(&id) {
            Some(&pos) => &self.adjacency[pos],
            None => &[],
        }
    }

    /// All connections, grouped by source in registration order
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.adjacency.iter().flatten()
    }

    pub fn connection_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Register a new facility
    pub fn add_facility(&mut self, facility: Facility) -> Result<()> {
        if facility.id.value() > self.max_node_id {
            return Err(FacnetError::invalid_value(
                "facility id",
                format!("{} (maximum is {})", facility.id, self.max_node_id),
            ));
        }
        if self.has_node(facility.id) {
            return Err(FacnetError::already_exists("facility", facility.id));
        }
        validate_text("facility name", &facility.name)?;
        validate_text("district", &facility.district)?;
        if facility.name.trim().is_empty() {
            bail_invalid!("facility name", "(empty)");
        }

        tracing::debug!(id = %facility.id, name = %facility.name, "add_facility");
        self.positions.insert(facility.id, self.facilities.len());
        self.facilities.push(facility);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Apply a partial update to an existing facility
    pub fn update_facility(&mut self, id: NodeId, update: FacilityUpdate) -> Result<&Facility> {
        let pos = *self
            .positions
            .get(&id)
            .ok_or(FacnetError::UnknownNode { id })?;

        if let Some(name) = &update.name {
            validate_text("facility name", name)?;
            if name.trim().is_empty() {
                bail_invalid!("facility name", "(empty)");
            }
        }
        if let Some(district) = &update.district {
            validate_text("district", district)?;
        }

        let facility = &mut self.facilities[pos];
        if let Some(name) = update.name {
            facility.name = name;
        }
        if let Some(district) = update.district {
            facility.district = district;
        }
        if let Some(latitude) = update.latitude {
            facility.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            facility.longitude = longitude;
        }
        if let Some(capacity) = update.capacity {
            facility.capacity = capacity;
        }
        tracing::debug!(id = %id, "update_facility");
        Ok(&self.facilities[pos])
    }

    /// Remove a facility together with its outgoing connections and every
    /// connection that points at it. Returns the facility and the number of
    /// connections dropped.
    pub fn remove_facility(&mut self, id: NodeId) -> Result<(Facility, usize)> {
        let pos = self
            .positions
            .remove(&id)
            .ok_or(FacnetError::UnknownNode { id })?;

        let facility = self.facilities.remove(pos);
        let mut dropped = self.adjacency.remove(pos).len();

        // Shift the positions of facilities registered after the removed one
        for (i, f) in self.facilities.iter().enumerate().skip(pos) {
            self.positions.insert(f.id, i);
        }

        for outgoing in &mut self.adjacency {
            let before = outgoing.len();
            outgoing.retain(|c| c.to != id);
            dropped += before - outgoing.len();
        }

        tracing::debug!(id = %id, connections_removed = dropped, "remove_facility");
        Ok((facility, dropped))
    }

    /// Insert a directed connection. Both endpoints must be registered and
    /// the distance must be finite and non-negative.
    pub fn add_connection(&mut self, connection: Connection) -> Result<()> {
        let pos = *self
            .positions
            .get(&connection.from)
            .ok_or(FacnetError::UnknownNode {
                id: connection.from,
            })?;
        if !self.has_node(connection.to) {
            return Err(FacnetError::UnknownNode { id: connection.to });
        }
        validate_distance(connection.distance)?;
        validate_text("connection label", &connection.label)?;

        tracing::debug!(
            from = %connection.from,
            to = %connection.to,
            distance = connection.distance,
            "add_connection"
        );
        self.adjacency[pos].push(connection);
        Ok(())
    }

    /// Update every connection `from -> to`. Returns how many were changed.
    pub fn update_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
        update: ConnectionUpdate,
    ) -> Result<usize> {
        if let Some(distance) = update.distance {
            validate_distance(distance)?;
        }
        if let Some(label) = &update.label {
            validate_text("connection label", label)?;
        }

        let pos = *self
            .positions
            .get(&from)
            .ok_or(FacnetError::UnknownNode { id: from })?;

        let mut updated = 0;
        for conn in self.adjacency[pos].iter_mut().filter(|c| c.to == to) {
            if let Some(distance) = update.distance {
                conn.distance = distance;
            }
            if let Some(time) = update.time {
                conn.time = time;
            }
            if let Some(label) = &update.label {
                conn.label = label.clone();
            }
            updated += 1;
        }

        if updated == 0 {
            return Err(FacnetError::not_found(
                "connection",
                format!("{} -> {}", from, to),
            ));
        }
        Ok(updated)
    }

    /// Remove every connection `from -> to`. Returns how many were removed.
    pub fn remove_connection(&mut self, from: NodeId, to: NodeId) -> Result<usize> {
        let removed = match self.positions.get(&from) {
            Some(&pos) => {
                let outgoing = &mut self.adjacency[pos];
                let before = outgoing.len();
                outgoing.retain(|c| c.to != to);
                before - outgoing.len()
            }
            None => 0,
        };

        if removed == 0 {
            return Err(FacnetError::not_found(
                "connection",
                format!("{} -> {}", from, to),
            ));
        }
        tracing::debug!(from = %from, to = %to, removed, "remove_connection");
        Ok(removed)
    }
}

fn validate_distance(distance: f64) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        bail_invalid!("distance", distance);
    }
    Ok(())
}

/// Text fields are persisted as comma-separated records
fn validate_text(context: &str, value: &str) -> Result<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(FacnetError::invalid_value(
            context,
            format!("{:?} (commas and line breaks are not allowed)", value),
        ));
    }
    Ok(())
}
