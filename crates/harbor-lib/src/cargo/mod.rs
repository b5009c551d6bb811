//! Cargo data types and manifest loading.
//!
//! - [`category`] - Cargo categories and their consumption multipliers
//! - [`unit`] - Individual cargo units and batches, plus the cargo factory
//! - [`manifest`] - CSV manifest loading
//!
//! # Example
//!
//! ```
//! use harbor_lib::cargo::{CargoCategory, CargoUnit};
//!
//! let reefer = CargoUnit::new(2, CargoCategory::Refrigerated, 10.0).unwrap();
//! assert_eq!(reefer.total_cost(), 50.0);
//!
//! let batch = CargoUnit::create("small", 1, 100.0, 2, Some(101)).unwrap();
//! assert_eq!(batch.total_weight(), 200.0);
//! ```

pub mod category;
pub mod manifest;
pub mod unit;

pub use category::CargoCategory;
pub use manifest::CargoManifest;
pub use unit::{CargoId, CargoUnit};
