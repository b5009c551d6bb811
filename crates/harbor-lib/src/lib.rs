//! Harbor library entry points.
//!
//! This crate models ships carrying typed cargo between ports: ports tracking
//! which vessels reside there, vessels with fuel and capacity ceilings, cargo
//! with per-category consumption rules, and a preset vessel builder. Every
//! operation either commits fully or leaves state untouched. Higher-level
//! consumers (the CLI) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod cargo;
pub mod error;
pub mod port;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod vessel;

pub use cargo::{CargoCategory, CargoId, CargoManifest, CargoUnit};
pub use error::{CapacityLimit, Error, Rejection, Result};
pub use port::{Coordinates, Port, PortDirectory, PortId};
pub use report::{PortRecord, SimulationReport, VesselRecord};
pub use scenario::{Action, CargoSpec, PortSpec, Scenario, VesselSpec};
pub use simulation::{ActionRecord, Outcome, Simulation};
pub use vessel::{
    CapacityModel, ContainerLimits, Vessel, VesselBuilder, VesselClass, VesselId,
};
