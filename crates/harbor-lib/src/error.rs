use std::fmt;

use thiserror::Error;

use crate::cargo::CargoId;
use crate::port::PortId;
use crate::vessel::VesselId;

/// Convenient result alias for the harbor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// These are configuration and programming errors. Capacity and fuel limits
/// hit at runtime are reported through [`Rejection`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a cargo or vessel class tag is not one of the recognized tags.
    #[error("unknown category: {}", display_tag(.tag))]
    UnknownCategory { tag: Option<String> },

    /// Raised when a port id is not registered in the directory.
    #[error("unknown port: {id}")]
    UnknownPort { id: PortId },

    /// Raised when a scenario action references a vessel that does not exist.
    #[error("unknown vessel: {id}")]
    UnknownVessel { id: VesselId },

    /// Raised when a scenario action references cargo that does not exist.
    #[error("unknown cargo: {id}")]
    UnknownCargo { id: CargoId },

    /// Raised when two ports share the same id.
    #[error("duplicate port id: {id}")]
    DuplicatePort { id: PortId },

    /// Raised when two vessels share the same id.
    #[error("duplicate vessel id: {id}")]
    DuplicateVessel { id: VesselId },

    /// Raised when a manifest or scenario lists the same cargo id twice.
    #[error("duplicate cargo id: {id}")]
    DuplicateCargoId { id: CargoId },

    /// Raised when sailing a vessel that was never docked at a port.
    #[error("vessel {id} is not docked at any port")]
    NotDocked { id: VesselId },

    /// Raised when docking a vessel that is already at a port.
    #[error("vessel {id} is already docked at port {port}")]
    AlreadyDocked { id: VesselId, port: PortId },

    /// Raised when vessel parameters fail validation.
    #[error("invalid vessel data: {message}")]
    VesselValidation { message: String },

    /// Raised when cargo parameters fail validation.
    #[error("invalid cargo data: {message}")]
    CargoValidation { message: String },

    /// Raised when a cargo manifest cannot be parsed.
    #[error("invalid cargo manifest: {message}")]
    ManifestValidation { message: String },

    /// Raised when a scenario is structurally invalid.
    #[error("invalid scenario: {message}")]
    ScenarioValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn display_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("'{tag}'"),
        None => "<unset>".to_string(),
    }
}

/// Ceiling that caused a load to be rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityLimit {
    /// Total container count.
    AllContainers { max: usize },
    /// Heavy-family container count (heavy, refrigerated and liquid).
    HeavyContainers { max: usize },
    RefrigeratedContainers { max: usize },
    LiquidContainers { max: usize },
    /// Aggregate cargo weight.
    Weight { max: f64, requested: f64 },
}

impl fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityLimit::AllContainers { max } => write!(f, "container limit of {max}"),
            CapacityLimit::HeavyContainers { max } => {
                write!(f, "heavy container limit of {max}")
            }
            CapacityLimit::RefrigeratedContainers { max } => {
                write!(f, "refrigerated container limit of {max}")
            }
            CapacityLimit::LiquidContainers { max } => {
                write!(f, "liquid container limit of {max}")
            }
            CapacityLimit::Weight { max, requested } => {
                write!(f, "weight limit of {max} (requested {requested})")
            }
        }
    }
}

/// Recoverable outcome of an operation that was refused without changing state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Load refused because a count or weight ceiling would be violated.
    #[error("capacity exceeded: {limit}")]
    CapacityExceeded { limit: CapacityLimit },

    /// Sail refused because the trip costs more fuel than is aboard.
    #[error("insufficient fuel: needed {needed}, available {available}")]
    InsufficientFuel { needed: f64, available: f64 },

    /// Unload refused because the unit is not aboard.
    #[error("cargo {id} is not aboard")]
    UnitNotFound { id: CargoId },

    /// FIFO unload refused because nothing is aboard.
    #[error("no cargo aboard")]
    HoldEmpty,

    /// Load refused because the unit already travels on a vessel.
    #[error("cargo {id} is already aboard {vessel}")]
    AlreadyAboard { id: CargoId, vessel: VesselId },
}
