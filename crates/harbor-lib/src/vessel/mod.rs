//! Vessels: capacity models, state transitions and the preset builder.
//!
//! - [`capacity`] - Container count and weight ceilings
//! - [`state`] - The [`Vessel`] type with load, unload, refuel and sail operations
//! - [`builder`] - Preset [`VesselClass`]es and the [`VesselBuilder`]
//!
//! # Example
//!
//! ```
//! use harbor_lib::port::{Port, PortDirectory};
//! use harbor_lib::vessel::{CapacityModel, ContainerLimits, Vessel};
//!
//! let mut ports = PortDirectory::new();
//! ports.insert(Port::new(1, 0.0, 0.0)).unwrap();
//! ports.insert(Port::new(2, 3.0, 4.0)).unwrap();
//!
//! let limits = ContainerLimits {
//!     max_all_containers: 10,
//!     max_heavy_containers: 5,
//!     max_refrigerated_containers: 2,
//!     max_liquid_containers: 2,
//! };
//! let mut vessel = Vessel::new("1", 10.0, CapacityModel::ContainerCount(limits), 1.0).unwrap();
//! vessel.dock_at(&mut ports, 1).unwrap();
//!
//! assert!(vessel.sail_to(&mut ports, 2).unwrap());
//! assert_eq!(vessel.fuel(), 5.0);
//! ```

pub mod builder;
pub mod capacity;
pub mod state;

pub use builder::{VesselBuilder, VesselClass, DEFAULT_FUEL_CONSUMPTION_PER_KM};
pub use capacity::{CapacityModel, ContainerLimits};
pub use state::{Vessel, VesselId};
