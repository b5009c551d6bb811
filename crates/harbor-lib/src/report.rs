//! Flat end-of-run record built from read accessors.
//!
//! The library only assembles the record; writing it anywhere is left to the
//! caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cargo::CargoId;
use crate::port::{Port, PortId};
use crate::vessel::{Vessel, VesselId};

/// Position of a port in the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    pub lat: f64,
    pub lon: f64,
}

/// Final fuel and cargo of a vessel in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub fuel_left: f64,
    pub cargo_ids: Vec<CargoId>,
}

/// Structured summary of a simulation run that higher-level consumers can serialise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub ports: BTreeMap<PortId, PortRecord>,
    pub vessels: BTreeMap<VesselId, VesselRecord>,
}

impl SimulationReport {
    pub fn new<'a>(
        ports: impl IntoIterator<Item = &'a Port>,
        vessels: impl IntoIterator<Item = &'a Vessel>,
    ) -> Self {
        let ports = ports
            .into_iter()
            .map(|port| {
                (
                    port.id(),
                    PortRecord {
                        lat: port.latitude(),
                        lon: port.longitude(),
                    },
                )
            })
            .collect();
        let vessels = vessels
            .into_iter()
            .map(|vessel| {
                (
                    vessel.id().to_string(),
                    VesselRecord {
                        fuel_left: vessel.fuel(),
                        cargo_ids: vessel.cargo_ids(),
                    },
                )
            })
            .collect();

        Self { ports, vessels }
    }
}
