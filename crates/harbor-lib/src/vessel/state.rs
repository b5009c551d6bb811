//! Vessel state and the operations that mutate it.

use tracing::debug;

use crate::cargo::{CargoId, CargoUnit};
use crate::error::{Error, Rejection, Result};
use crate::port::{PortDirectory, PortId};

use super::capacity::CapacityModel;

/// Identifier of a vessel.
pub type VesselId = String;

/// A vessel carrying cargo between ports.
///
/// Every mutating operation is all-or-nothing: a rejected load, unload, refuel
/// or sail leaves fuel, location and cargo exactly as they were.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    id: VesselId,
    fuel: f64,
    current_port: Option<PortId>,
    capacity: CapacityModel,
    fuel_consumption_per_km: f64,
    loaded: Vec<CargoUnit>,
}

impl Vessel {
    /// Create an undocked vessel with an empty hold.
    pub fn new(
        id: impl Into<VesselId>,
        fuel: f64,
        capacity: CapacityModel,
        fuel_consumption_per_km: f64,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::VesselValidation {
                message: "vessel id must not be empty".to_string(),
            });
        }

        let fields = [
            (fuel, "fuel"),
            (fuel_consumption_per_km, "fuel_consumption_per_km"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::VesselValidation {
                    message: format!("{field} of vessel {id} must be finite and non-negative"),
                });
            }
        }
        capacity.validate()?;

        Ok(Self {
            id,
            fuel,
            current_port: None,
            capacity,
            fuel_consumption_per_km,
            loaded: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn current_port(&self) -> Option<PortId> {
        self.current_port
    }

    pub fn is_docked(&self) -> bool {
        self.current_port.is_some()
    }

    pub fn capacity(&self) -> &CapacityModel {
        &self.capacity
    }

    pub fn fuel_consumption_per_km(&self) -> f64 {
        self.fuel_consumption_per_km
    }

    /// Cargo aboard, in loading order.
    pub fn loaded(&self) -> &[CargoUnit] {
        &self.loaded
    }

    pub fn cargo_ids(&self) -> Vec<CargoId> {
        self.loaded.iter().map(CargoUnit::id).collect()
    }

    /// Sum of the batch weights of all cargo aboard.
    pub fn loaded_weight(&self) -> f64 {
        self.loaded.iter().map(CargoUnit::total_weight).sum()
    }

    /// Sum of the consumption cost of all cargo aboard.
    pub fn total_cost(&self) -> f64 {
        self.loaded.iter().map(CargoUnit::total_cost).sum()
    }

    /// Place an undocked vessel at a port.
    pub fn dock_at(&mut self, ports: &mut PortDirectory, port: PortId) -> Result<()> {
        if let Some(current) = self.current_port {
            return Err(Error::AlreadyDocked {
                id: self.id.clone(),
                port: current,
            });
        }
        ports.require_mut(port)?.register_arrival(&self.id);
        self.current_port = Some(port);
        debug!(vessel = %self.id, port, "vessel docked");
        Ok(())
    }

    /// Load a copy of `unit` if every capacity ceiling still holds.
    pub fn try_load(&mut self, unit: &CargoUnit) -> std::result::Result<(), Rejection> {
        self.capacity
            .check(&self.loaded, unit)
            .map_err(|limit| Rejection::CapacityExceeded { limit })?;
        self.loaded.push(unit.clone());
        Ok(())
    }

    /// Load a copy of `unit`, returning `false` when capacity is exhausted.
    #[must_use]
    pub fn load(&mut self, unit: &CargoUnit) -> bool {
        self.try_load(unit).is_ok()
    }

    /// Remove the first unit aboard equal to `unit`.
    pub fn try_unload(&mut self, unit: &CargoUnit) -> std::result::Result<CargoUnit, Rejection> {
        let index = self
            .loaded
            .iter()
            .position(|u| u == unit)
            .ok_or(Rejection::UnitNotFound { id: unit.id() })?;
        Ok(self.loaded.remove(index))
    }

    pub fn unload(&mut self, unit: &CargoUnit) -> Option<CargoUnit> {
        self.try_unload(unit).ok()
    }

    /// Remove the unit that was loaded first.
    pub fn unload_first(&mut self) -> Option<CargoUnit> {
        if self.loaded.is_empty() {
            None
        } else {
            Some(self.loaded.remove(0))
        }
    }

    /// Add fuel. The amount must be finite and non-negative.
    pub fn refuel(&mut self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::VesselValidation {
                message: format!("refuel amount must be finite and non-negative, got {amount}"),
            });
        }
        self.fuel += amount;
        Ok(())
    }

    /// Fuel required to sail from the current port to `destination`.
    pub fn fuel_needed(&self, ports: &PortDirectory, destination: PortId) -> Result<f64> {
        let origin = self.origin()?;
        Ok(ports.distance(origin, destination)? * self.fuel_consumption_per_km)
    }

    /// Sail to `destination` if enough fuel is aboard.
    ///
    /// The outer `Result` carries programming errors (vessel not docked, unknown
    /// port); the inner one reports [`Rejection::InsufficientFuel`]. In both
    /// failure cases neither fuel nor location change.
    pub fn try_sail_to(
        &mut self,
        ports: &mut PortDirectory,
        destination: PortId,
    ) -> Result<std::result::Result<(), Rejection>> {
        let origin = self.origin()?;
        let needed = self.fuel_needed(ports, destination)?;

        if self.fuel < needed {
            return Ok(Err(Rejection::InsufficientFuel {
                needed,
                available: self.fuel,
            }));
        }

        self.fuel -= needed;
        ports.require_mut(origin)?.register_departure(&self.id);
        self.current_port = Some(destination);
        ports.require_mut(destination)?.register_arrival(&self.id);

        debug!(
            vessel = %self.id,
            from = origin,
            to = destination,
            fuel_used = needed,
            fuel_left = self.fuel,
            "vessel sailed"
        );
        Ok(Ok(()))
    }

    /// Sail to `destination`, returning `Ok(false)` when fuel is insufficient.
    pub fn sail_to(&mut self, ports: &mut PortDirectory, destination: PortId) -> Result<bool> {
        Ok(self.try_sail_to(ports, destination)?.is_ok())
    }

    fn origin(&self) -> Result<PortId> {
        self.current_port.ok_or_else(|| Error::NotDocked {
            id: self.id.clone(),
        })
    }
}
