//! Cargo units and the cargo factory.

use serde::Serialize;

use crate::error::{Error, Result};

use super::category::CargoCategory;

/// Identifier of a cargo unit.
pub type CargoId = u64;

/// An immutable piece of cargo: a single container or a batch of identical ones.
///
/// `unit_weight` is the weight of one container; [`CargoUnit::total_weight`] is
/// the weight of the whole batch. Equality compares `(id, unit_weight)` only.
#[derive(Debug, Clone, Serialize)]
pub struct CargoUnit {
    id: CargoId,
    category: CargoCategory,
    unit_weight: f64,
    count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_id: Option<u64>,
}

impl CargoUnit {
    /// Create a single cargo unit.
    pub fn new(id: CargoId, category: CargoCategory, weight: f64) -> Result<Self> {
        Self::batch(id, category, weight, 1)
    }

    /// Create a batch of `count` units sharing the same per-unit weight.
    pub fn batch(id: CargoId, category: CargoCategory, unit_weight: f64, count: u32) -> Result<Self> {
        if !unit_weight.is_finite() || unit_weight < 0.0 {
            return Err(Error::CargoValidation {
                message: format!(
                    "weight of cargo {id} must be finite and non-negative, got {unit_weight}"
                ),
            });
        }
        if count == 0 {
            return Err(Error::CargoValidation {
                message: format!("count of cargo {id} must be at least 1"),
            });
        }

        Ok(Self {
            id,
            category,
            unit_weight,
            count,
            container_id: None,
        })
    }

    /// Factory entry point taking a category tag such as `"heavy"` or `"small"`.
    ///
    /// # Errors
    /// [`Error::UnknownCategory`] for an unrecognized tag and
    /// [`Error::CargoValidation`] for a negative weight or zero count.
    pub fn create(
        category: &str,
        id: CargoId,
        unit_weight: f64,
        count: u32,
        container_id: Option<u64>,
    ) -> Result<Self> {
        let category: CargoCategory = category.parse()?;
        let unit = Self::batch(id, category, unit_weight, count)?;
        Ok(match container_id {
            Some(container_id) => unit.with_container(container_id),
            None => unit,
        })
    }

    /// Attach the id of the physical container holding this cargo.
    pub fn with_container(mut self, container_id: u64) -> Self {
        self.container_id = Some(container_id);
        self
    }

    pub fn id(&self) -> CargoId {
        self.id
    }

    pub fn category(&self) -> CargoCategory {
        self.category
    }

    /// Weight of a single unit in the batch.
    pub fn unit_weight(&self) -> f64 {
        self.unit_weight
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn container_id(&self) -> Option<u64> {
        self.container_id
    }

    /// Weight of the whole batch (`unit_weight × count`).
    pub fn total_weight(&self) -> f64 {
        self.unit_weight * f64::from(self.count)
    }

    /// Consumption cost: total weight scaled by the category multiplier.
    pub fn total_cost(&self) -> f64 {
        self.total_weight() * self.category.multiplier()
    }
}

impl PartialEq for CargoUnit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.unit_weight == other.unit_weight
    }
}
