//! Scenario driver: builds ports, vessels and cargo, then applies actions.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::cargo::{CargoId, CargoUnit};
use crate::error::{Error, Rejection, Result};
use crate::port::{PortDirectory, PortId};
use crate::report::SimulationReport;
use crate::scenario::{Action, Scenario, VesselSpec};
use crate::vessel::{Vessel, VesselBuilder, VesselId, DEFAULT_FUEL_CONSUMPTION_PER_KM};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<std::result::Result<(), Rejection>> for Outcome {
    fn from(result: std::result::Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}

/// An action paired with what happened when it was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub action: Action,
    pub outcome: Outcome,
}

/// Mutable world of one simulation run.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    ports: PortDirectory,
    vessels: Vec<Vessel>,
    cargo: BTreeMap<CargoId, CargoUnit>,
    aboard: BTreeMap<CargoId, VesselId>,
}

impl Simulation {
    /// Construct ports, vessels and cargo and dock every vessel that names a port.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        scenario.validate()?;

        let mut simulation = Self::default();
        for spec in &scenario.ports {
            simulation.ports.insert(spec.to_port())?;
        }

        for spec in &scenario.cargo {
            let unit = spec.to_unit()?;
            if simulation.cargo.contains_key(&unit.id()) {
                return Err(Error::DuplicateCargoId { id: unit.id() });
            }
            simulation.cargo.insert(unit.id(), unit);
        }

        for spec in &scenario.vessels {
            let mut vessel = build_vessel(spec)?;
            simulation.ensure_unique_vessel(&vessel)?;
            if let Some(port) = spec.port {
                vessel.dock_at(&mut simulation.ports, port)?;
            }
            simulation.vessels.push(vessel);
        }

        info!(
            ports = simulation.ports.len(),
            vessels = simulation.vessels.len(),
            cargo = simulation.cargo.len(),
            "simulation constructed"
        );
        Ok(simulation)
    }

    /// Build the world described by `scenario` and apply all of its actions.
    pub fn run_scenario(scenario: &Scenario) -> Result<(Self, Vec<ActionRecord>)> {
        let mut simulation = Self::from_scenario(scenario)?;
        let records = simulation.run(&scenario.actions)?;
        Ok((simulation, records))
    }

    /// Apply actions in order. Stops at the first programming error.
    pub fn run(&mut self, actions: &[Action]) -> Result<Vec<ActionRecord>> {
        actions
            .iter()
            .map(|action| {
                Ok(ActionRecord {
                    action: action.clone(),
                    outcome: self.apply(action)?,
                })
            })
            .collect()
    }

    /// Apply a single action.
    ///
    /// Capacity, fuel and missing-cargo refusals come back as
    /// [`Outcome::Rejected`]; unknown ids are errors. A unit travels on at most
    /// one vessel at a time, so loading it again before it is unloaded is
    /// refused with [`Rejection::AlreadyAboard`].
    pub fn apply(&mut self, action: &Action) -> Result<Outcome> {
        let index = self.vessel_index(action.vessel())?;

        let outcome: Outcome = match action {
            Action::Dock { port, .. } => {
                self.vessels[index].dock_at(&mut self.ports, *port)?;
                Outcome::Applied
            }
            Action::Load { cargo, .. } => {
                let unit = require_cargo(&self.cargo, *cargo)?;
                if let Some(carrier) = self.aboard.get(cargo) {
                    Outcome::Rejected(Rejection::AlreadyAboard {
                        id: *cargo,
                        vessel: carrier.clone(),
                    })
                } else {
                    let vessel = &mut self.vessels[index];
                    let outcome = Outcome::from(vessel.try_load(unit));
                    if outcome.is_applied() {
                        self.aboard.insert(*cargo, vessel.id().to_string());
                    }
                    outcome
                }
            }
            Action::Unload { cargo, .. } => {
                let unit = require_cargo(&self.cargo, *cargo)?;
                let outcome = Outcome::from(self.vessels[index].try_unload(unit).map(drop));
                if outcome.is_applied() {
                    self.aboard.remove(cargo);
                }
                outcome
            }
            Action::UnloadFirst { .. } => match self.vessels[index].unload_first() {
                Some(unit) => {
                    self.aboard.remove(&unit.id());
                    Outcome::Applied
                }
                None => Outcome::Rejected(Rejection::HoldEmpty),
            },
            Action::Refuel { amount, .. } => {
                self.vessels[index].refuel(*amount)?;
                Outcome::Applied
            }
            Action::Sail { to, .. } => self.vessels[index]
                .try_sail_to(&mut self.ports, *to)?
                .into(),
        };

        match &outcome {
            Outcome::Applied => info!(?action, "action applied"),
            Outcome::Rejected(rejection) => warn!(?action, %rejection, "action rejected"),
        }
        Ok(outcome)
    }

    pub fn ports(&self) -> &PortDirectory {
        &self.ports
    }

    /// Vessels in scenario order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel(&self, id: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|vessel| vessel.id() == id)
    }

    pub fn cargo(&self, id: CargoId) -> Option<&CargoUnit> {
        self.cargo.get(&id)
    }

    /// Vessel currently carrying the unit, if any.
    pub fn carrier(&self, cargo: CargoId) -> Option<&str> {
        self.aboard.get(&cargo).map(String::as_str)
    }

    /// Port the vessel currently occupies, according to the port lists.
    pub fn locate(&self, vessel: &str) -> Option<PortId> {
        self.ports.locate(vessel)
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(self.ports.iter(), self.vessels.iter())
    }

    fn ensure_unique_vessel(&self, vessel: &Vessel) -> Result<()> {
        if self.vessel(vessel.id()).is_some() {
            return Err(Error::DuplicateVessel {
                id: vessel.id().to_string(),
            });
        }
        Ok(())
    }

    fn vessel_index(&self, id: &str) -> Result<usize> {
        self.vessels
            .iter()
            .position(|vessel| vessel.id() == id)
            .ok_or_else(|| Error::UnknownVessel { id: id.to_string() })
    }
}

fn require_cargo(cargo: &BTreeMap<CargoId, CargoUnit>, id: CargoId) -> Result<&CargoUnit> {
    cargo.get(&id).ok_or(Error::UnknownCargo { id })
}

fn build_vessel(spec: &VesselSpec) -> Result<Vessel> {
    if let Some(class) = &spec.class {
        let mut builder = VesselBuilder::new().select_category(class);
        if let Some(rate) = spec.fuel_consumption_per_km {
            builder = builder.fuel_consumption_per_km(rate);
        }
        return builder.build(spec.id.clone());
    }

    match (spec.fuel, spec.capacity) {
        (Some(fuel), Some(capacity)) => Vessel::new(
            spec.id.clone(),
            fuel,
            capacity,
            spec.fuel_consumption_per_km
                .unwrap_or(DEFAULT_FUEL_CONSUMPTION_PER_KM),
        ),
        _ => Err(Error::ScenarioValidation {
            message: format!(
                "vessel {} needs either a class or both fuel and capacity",
                spec.id
            ),
        }),
    }
}
