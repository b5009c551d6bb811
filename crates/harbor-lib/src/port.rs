//! Ports and the directory that owns them.
//!
//! A [`Port`] records which vessels are currently moored there and which
//! vessels have ever departed. Vessels never touch those lists directly; they
//! go through [`Port::register_arrival`] and [`Port::register_departure`] via the
//! [`PortDirectory`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::vessel::VesselId;

/// Identifier of a port.
pub type PortId = u64;

/// Geographic point on a plain latitude/longitude plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Euclidean norm of the coordinate difference.
    ///
    /// This is a planar approximation, not a great-circle distance.
    pub fn distance(&self, other: &Coordinates) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

/// A port with its current residents and departure history.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    id: PortId,
    position: Coordinates,
    current: Vec<VesselId>,
    history: Vec<VesselId>,
}

impl Port {
    pub fn new(id: PortId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            position: Coordinates {
                latitude,
                longitude,
            },
            current: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> PortId {
        self.id
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    /// Vessels currently moored, in arrival order.
    pub fn current(&self) -> &[VesselId] {
        &self.current
    }

    /// Vessels that have departed at least once, in order of first departure.
    pub fn history(&self) -> &[VesselId] {
        &self.history
    }

    pub fn is_present(&self, vessel: &str) -> bool {
        self.current.iter().any(|v| v == vessel)
    }

    /// Symmetric, non-negative distance to another port.
    pub fn distance(&self, other: &Port) -> f64 {
        self.position.distance(&other.position)
    }

    /// Record a vessel as present. Arriving twice has no further effect.
    pub fn register_arrival(&mut self, vessel: &str) {
        if !self.is_present(vessel) {
            self.current.push(vessel.to_string());
        }
    }

    /// Remove a vessel from the current list and note its first departure.
    ///
    /// Does nothing if the vessel is not present.
    pub fn register_departure(&mut self, vessel: &str) {
        let Some(index) = self.current.iter().position(|v| v == vessel) else {
            return;
        };
        let departed = self.current.remove(index);
        if !self.history.contains(&departed) {
            self.history.push(departed);
        }
    }
}

/// All ports of a simulation, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PortDirectory {
    ports: BTreeMap<PortId, Port>,
}

impl PortDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a port. Ids must be unique.
    pub fn insert(&mut self, port: Port) -> Result<()> {
        if self.ports.contains_key(&port.id) {
            return Err(Error::DuplicatePort { id: port.id });
        }
        self.ports.insert(port.id, port);
        Ok(())
    }

    pub fn get(&self, id: PortId) -> Option<&Port> {
        self.ports.get(&id)
    }

    /// Look up a port, failing with [`Error::UnknownPort`].
    pub fn require(&self, id: PortId) -> Result<&Port> {
        self.get(id).ok_or(Error::UnknownPort { id })
    }

    /// Mutable access stays inside the crate so residents only change as
    /// vessels dock and sail.
    pub(crate) fn require_mut(&mut self, id: PortId) -> Result<&mut Port> {
        self.ports.get_mut(&id).ok_or(Error::UnknownPort { id })
    }

    /// Distance between two registered ports.
    pub fn distance(&self, from: PortId, to: PortId) -> Result<f64> {
        Ok(self.require(from)?.distance(self.require(to)?))
    }

    /// Port whose current list holds the vessel, if any.
    pub fn locate(&self, vessel: &str) -> Option<PortId> {
        self.ports
            .values()
            .find(|port| port.is_present(vessel))
            .map(Port::id)
    }

    /// Ports in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}
