//! Capacity ceilings checked when loading cargo.

use serde::{Deserialize, Serialize};

use crate::cargo::{CargoCategory, CargoUnit};
use crate::error::{CapacityLimit, Error, Result};

/// Per-category container count ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerLimits {
    pub max_all_containers: usize,
    /// Applies to heavy, refrigerated and liquid containers together.
    pub max_heavy_containers: usize,
    pub max_refrigerated_containers: usize,
    pub max_liquid_containers: usize,
}

impl ContainerLimits {
    fn check(
        &self,
        loaded: &[CargoUnit],
        unit: &CargoUnit,
    ) -> std::result::Result<(), CapacityLimit> {
        if loaded.len() >= self.max_all_containers {
            return Err(CapacityLimit::AllContainers {
                max: self.max_all_containers,
            });
        }

        let category = unit.category();
        let count_where = |pred: fn(CargoCategory) -> bool| {
            loaded.iter().filter(|u| pred(u.category())).count()
        };

        if category.is_heavy() && count_where(CargoCategory::is_heavy) >= self.max_heavy_containers
        {
            return Err(CapacityLimit::HeavyContainers {
                max: self.max_heavy_containers,
            });
        }

        match category {
            CargoCategory::Refrigerated
                if count_where(|c| c == CargoCategory::Refrigerated)
                    >= self.max_refrigerated_containers =>
            {
                Err(CapacityLimit::RefrigeratedContainers {
                    max: self.max_refrigerated_containers,
                })
            }
            CargoCategory::Liquid
                if count_where(|c| c == CargoCategory::Liquid) >= self.max_liquid_containers =>
            {
                Err(CapacityLimit::LiquidContainers {
                    max: self.max_liquid_containers,
                })
            }
            _ => Ok(()),
        }
    }
}

/// How a vessel limits the cargo it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CapacityModel {
    /// Container counts, overall and per category.
    ContainerCount(ContainerLimits),
    /// Aggregate weight of all loaded cargo.
    Weight { max_weight: f64 },
}

impl CapacityModel {
    /// Validate capacity parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        match self {
            CapacityModel::ContainerCount(_) => Ok(()),
            CapacityModel::Weight { max_weight } => {
                if !max_weight.is_finite() || *max_weight < 0.0 {
                    return Err(Error::VesselValidation {
                        message: format!(
                            "max_weight must be finite and non-negative, got {max_weight}"
                        ),
                    });
                }
                Ok(())
            }
        }
    }

    /// Check whether `unit` fits on top of `loaded`.
    pub fn check(
        &self,
        loaded: &[CargoUnit],
        unit: &CargoUnit,
    ) -> std::result::Result<(), CapacityLimit> {
        match self {
            CapacityModel::ContainerCount(limits) => limits.check(loaded, unit),
            CapacityModel::Weight { max_weight } => {
                let requested =
                    loaded.iter().map(CargoUnit::total_weight).sum::<f64>() + unit.total_weight();
                if requested <= *max_weight {
                    Ok(())
                } else {
                    Err(CapacityLimit::Weight {
                        max: *max_weight,
                        requested,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(all: usize, heavy: usize, reefer: usize, liquid: usize) -> CapacityModel {
        CapacityModel::ContainerCount(ContainerLimits {
            max_all_containers: all,
            max_heavy_containers: heavy,
            max_refrigerated_containers: reefer,
            max_liquid_containers: liquid,
        })
    }

    fn unit(id: u64, category: CargoCategory) -> CargoUnit {
        CargoUnit::new(id, category, 1.0).unwrap()
    }

    #[test]
    fn refrigerated_counts_against_heavy_ceiling() {
        let model = limits(10, 1, 5, 5);
        let loaded = vec![unit(1, CargoCategory::Refrigerated)];
        assert_eq!(
            model.check(&loaded, &unit(2, CargoCategory::Heavy)),
            Err(CapacityLimit::HeavyContainers { max: 1 })
        );
        assert_eq!(model.check(&loaded, &unit(3, CargoCategory::Plain)), Ok(()));
    }

    #[test]
    fn weight_ceiling_is_inclusive() {
        let model = CapacityModel::Weight { max_weight: 10.0 };
        let loaded = vec![CargoUnit::batch(1, CargoCategory::Plain, 2.0, 3).unwrap()];
        let fits = CargoUnit::new(2, CargoCategory::Heavy, 4.0).unwrap();
        let too_big = CargoUnit::new(3, CargoCategory::Heavy, 4.5).unwrap();
        assert_eq!(model.check(&loaded, &fits), Ok(()));
        assert!(model.check(&loaded, &too_big).is_err());
    }
}
