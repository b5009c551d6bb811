//! Declarative scenario files.
//!
//! A scenario lists the ports, vessels and cargo of one simulation run plus the
//! actions to apply, in JSON:
//!
//! ```json
//! {
//!   "ports": [{ "id": 1, "latitude": 50.0, "longitude": 30.0 }],
//!   "vessels": [{ "id": "Ship_001", "class": "medium", "port": 1 }],
//!   "cargo": [{ "category": "small", "id": 1, "weight": 100.0, "count": 2 }],
//!   "actions": [{ "action": "load", "vessel": "Ship_001", "cargo": 1 }]
//! }
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cargo::{CargoId, CargoUnit};
use crate::error::{Error, Result};
use crate::port::{Port, PortId};
use crate::vessel::{CapacityModel, ContainerLimits, VesselClass, VesselId};

/// Port entry of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortSpec {
    pub id: PortId,
    pub latitude: f64,
    pub longitude: f64,
}

impl PortSpec {
    pub fn to_port(&self) -> Port {
        Port::new(self.id, self.latitude, self.longitude)
    }
}

/// Vessel entry of a scenario.
///
/// Either `class` selects a builder preset, or `fuel` and `capacity` describe
/// the vessel explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub id: VesselId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacityModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_consumption_per_km: Option<f64>,
}

/// Cargo entry of a scenario, passed through the cargo factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSpec {
    pub category: String,
    pub id: CargoId,
    pub weight: f64,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<u64>,
}

fn default_count() -> u32 {
    1
}

impl CargoSpec {
    pub fn to_unit(&self) -> Result<CargoUnit> {
        CargoUnit::create(
            &self.category,
            self.id,
            self.weight,
            self.count,
            self.container_id,
        )
    }
}

/// One step of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Dock { vessel: VesselId, port: PortId },
    Load { vessel: VesselId, cargo: CargoId },
    Unload { vessel: VesselId, cargo: CargoId },
    UnloadFirst { vessel: VesselId },
    Refuel { vessel: VesselId, amount: f64 },
    Sail { vessel: VesselId, to: PortId },
}

impl Action {
    pub fn vessel(&self) -> &str {
        match self {
            Action::Dock { vessel, .. }
            | Action::Load { vessel, .. }
            | Action::Unload { vessel, .. }
            | Action::UnloadFirst { vessel }
            | Action::Refuel { vessel, .. }
            | Action::Sail { vessel, .. } => vessel,
        }
    }
}

/// Complete description of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub ports: Vec<PortSpec>,
    #[serde(default)]
    pub vessels: Vec<VesselSpec>,
    #[serde(default)]
    pub cargo: Vec<CargoSpec>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    /// Load a scenario from a reader producing JSON.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Two ports, one container ship with a basic and a refrigerated container,
    /// and a single voyage between the ports.
    pub fn demo() -> Self {
        Self {
            ports: vec![
                PortSpec {
                    id: 1,
                    latitude: 50.0,
                    longitude: 30.0,
                },
                PortSpec {
                    id: 2,
                    latitude: 60.0,
                    longitude: 40.0,
                },
            ],
            vessels: vec![VesselSpec {
                id: "1".to_string(),
                port: Some(1),
                class: None,
                fuel: Some(1000.0),
                capacity: Some(CapacityModel::ContainerCount(ContainerLimits {
                    max_all_containers: 10,
                    max_heavy_containers: 5,
                    max_refrigerated_containers: 2,
                    max_liquid_containers: 2,
                })),
                fuel_consumption_per_km: Some(1.5),
            }],
            cargo: vec![
                CargoSpec {
                    category: "basic".to_string(),
                    id: 1,
                    weight: 2000.0,
                    count: 1,
                    container_id: None,
                },
                CargoSpec {
                    category: "refrigerated".to_string(),
                    id: 2,
                    weight: 4000.0,
                    count: 1,
                    container_id: None,
                },
            ],
            actions: vec![
                Action::Load {
                    vessel: "1".to_string(),
                    cargo: 1,
                },
                Action::Load {
                    vessel: "1".to_string(),
                    cargo: 2,
                },
                Action::Sail {
                    vessel: "1".to_string(),
                    to: 2,
                },
            ],
        }
    }

    /// Check that every vessel is described either by class or explicitly.
    pub fn validate(&self) -> Result<()> {
        for vessel in &self.vessels {
            match (&vessel.class, vessel.fuel, &vessel.capacity) {
                (Some(class), None, None) => {
                    VesselClass::from_str(class)?;
                }
                (None, Some(_), Some(_)) => {}
                (Some(_), _, _) => {
                    return Err(Error::ScenarioValidation {
                        message: format!(
                            "vessel {} sets a class together with explicit fuel or capacity",
                            vessel.id
                        ),
                    });
                }
                (None, _, _) => {
                    return Err(Error::ScenarioValidation {
                        message: format!(
                            "vessel {} needs either a class or both fuel and capacity",
                            vessel.id
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(s)?;
        scenario.validate()?;
        Ok(scenario)
    }
}
