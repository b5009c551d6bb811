//! Preset vessel classes and the builder that instantiates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::capacity::CapacityModel;
use super::state::{Vessel, VesselId};

/// Fuel consumption per distance unit used when the builder is not told otherwise.
pub const DEFAULT_FUEL_CONSUMPTION_PER_KM: f64 = 1.0;

/// Preset vessel classes with fixed weight and fuel capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselClass {
    Lightweight,
    Medium,
    Heavy,
}

impl VesselClass {
    pub const ALL: [VesselClass; 3] = [
        VesselClass::Lightweight,
        VesselClass::Medium,
        VesselClass::Heavy,
    ];

    pub const fn max_weight(self) -> f64 {
        match self {
            VesselClass::Lightweight => 10_000.0,
            VesselClass::Medium => 20_000.0,
            VesselClass::Heavy => 50_000.0,
        }
    }

    pub const fn fuel_capacity(self) -> f64 {
        match self {
            VesselClass::Lightweight => 500.0,
            VesselClass::Medium => 1_000.0,
            VesselClass::Heavy => 2_000.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            VesselClass::Lightweight => "lightweight",
            VesselClass::Medium => "medium",
            VesselClass::Heavy => "heavy",
        }
    }
}

impl fmt::Display for VesselClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VesselClass {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lightweight" | "light" => Ok(VesselClass::Lightweight),
            "medium" => Ok(VesselClass::Medium),
            "heavy" => Ok(VesselClass::Heavy),
            _ => Err(Error::UnknownCategory {
                tag: Some(s.to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Selection {
    #[default]
    Unset,
    Class(VesselClass),
    Unrecognized(String),
}

/// Chainable builder producing preset weight-capacity vessels.
///
/// ```
/// use harbor_lib::vessel::VesselBuilder;
///
/// let ship = VesselBuilder::new().select_category("medium").build("Ship_001").unwrap();
/// assert_eq!(ship.fuel(), 1000.0);
/// assert!(ship.current_port().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VesselBuilder {
    selection: Selection,
    fuel_consumption_per_km: f64,
}

impl Default for VesselBuilder {
    fn default() -> Self {
        Self {
            selection: Selection::Unset,
            fuel_consumption_per_km: DEFAULT_FUEL_CONSUMPTION_PER_KM,
        }
    }
}

impl VesselBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the class by tag. Unrecognized tags are reported by [`VesselBuilder::build`].
    pub fn select_category(mut self, tag: &str) -> Self {
        self.selection = match tag.parse::<VesselClass>() {
            Ok(class) => Selection::Class(class),
            Err(_) => Selection::Unrecognized(tag.to_string()),
        };
        self
    }

    pub fn select_class(mut self, class: VesselClass) -> Self {
        self.selection = Selection::Class(class);
        self
    }

    pub fn fuel_consumption_per_km(mut self, rate: f64) -> Self {
        self.fuel_consumption_per_km = rate;
        self
    }

    /// Build a fully fuelled, undocked vessel of the selected class.
    ///
    /// # Errors
    /// [`Error::UnknownCategory`] when no class was selected or the tag was not
    /// recognized; [`Error::VesselValidation`] for an invalid consumption rate.
    pub fn build(&self, id: impl Into<VesselId>) -> Result<Vessel> {
        let class = match &self.selection {
            Selection::Class(class) => *class,
            Selection::Unset => return Err(Error::UnknownCategory { tag: None }),
            Selection::Unrecognized(tag) => {
                return Err(Error::UnknownCategory {
                    tag: Some(tag.clone()),
                })
            }
        };

        Vessel::new(
            id,
            class.fuel_capacity(),
            CapacityModel::Weight {
                max_weight: class.max_weight(),
            },
            self.fuel_consumption_per_km,
        )
    }
}
