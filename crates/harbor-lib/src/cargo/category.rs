//! Cargo categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Consumption multiplier for plain cargo.
pub const PLAIN_MULTIPLIER: f64 = 2.5;
/// Consumption multiplier for heavy cargo.
pub const HEAVY_MULTIPLIER: f64 = 3.0;
/// Consumption multiplier for refrigerated cargo.
pub const REFRIGERATED_MULTIPLIER: f64 = 5.0;
/// Consumption multiplier for liquid cargo.
pub const LIQUID_MULTIPLIER: f64 = 4.0;

/// Closed set of cargo categories.
///
/// Refrigerated and liquid cargo belong to the heavy family: they count against
/// a vessel's heavy container ceiling as well as their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoCategory {
    #[serde(alias = "small", alias = "basic")]
    Plain,
    Heavy,
    Refrigerated,
    Liquid,
}

impl CargoCategory {
    pub const ALL: [CargoCategory; 4] = [
        CargoCategory::Plain,
        CargoCategory::Heavy,
        CargoCategory::Refrigerated,
        CargoCategory::Liquid,
    ];

    /// Consumption multiplier applied to a unit's total weight.
    pub const fn multiplier(self) -> f64 {
        match self {
            CargoCategory::Plain => PLAIN_MULTIPLIER,
            CargoCategory::Heavy => HEAVY_MULTIPLIER,
            CargoCategory::Refrigerated => REFRIGERATED_MULTIPLIER,
            CargoCategory::Liquid => LIQUID_MULTIPLIER,
        }
    }

    /// Whether the category belongs to the heavy family.
    pub const fn is_heavy(self) -> bool {
        !matches!(self, CargoCategory::Plain)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CargoCategory::Plain => "plain",
            CargoCategory::Heavy => "heavy",
            CargoCategory::Refrigerated => "refrigerated",
            CargoCategory::Liquid => "liquid",
        }
    }
}

impl fmt::Display for CargoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CargoCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "small" | "basic" => Ok(CargoCategory::Plain),
            "heavy" => Ok(CargoCategory::Heavy),
            "refrigerated" => Ok(CargoCategory::Refrigerated),
            "liquid" => Ok(CargoCategory::Liquid),
            _ => Err(Error::UnknownCategory {
                tag: Some(s.to_string()),
            }),
        }
    }
}
