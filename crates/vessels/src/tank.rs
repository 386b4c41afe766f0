use serde::{Deserialize, Serialize};

use fleet_core::{Entity, FleetError, FleetResult, TankId};

/// Fuel carried by a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Diesel,
    HeavyFuel,
}

impl core::fmt::Display for FuelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            FuelType::Diesel => "diesel",
            FuelType::HeavyFuel => "heavy_fuel",
        })
    }
}

/// Relative slack allowed above capacity when filling, so decimal amounts
/// that sum to the capacity (0.1 + 0.2 into 0.3 liters) are not refused for
/// rounding alone.
const FILL_TOLERANCE: f64 = 1e-9;

/// A fuel compartment aboard a tanker.
///
/// Invariant: `0 <= current_level <= capacity`. Only [`Tank::fill`] and
/// [`Tank::fully_empty`] change the level, and both check before mutating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tank {
    id: TankId,
    fuel_type: FuelType,
    capacity: f64,
    current_level: f64,
}

impl Tank {
    /// Create an empty tank with a fresh identifier.
    pub fn new(fuel_type: FuelType, capacity: f64) -> FleetResult<Self> {
        if !(capacity.is_finite() && capacity > 0.0) {
            return Err(FleetError::InvalidTankCapacity);
        }
        Ok(Self {
            id: TankId::new(),
            fuel_type,
            capacity,
            current_level: 0.0,
        })
    }

    pub fn tank_id(&self) -> TankId {
        self.id
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn current_level(&self) -> f64 {
        self.current_level
    }

    pub fn free_capacity(&self) -> f64 {
        self.capacity - self.current_level
    }

    pub fn is_empty(&self) -> bool {
        self.current_level == 0.0
    }

    /// Add `liters` of fuel.
    ///
    /// A level that lands within a relative 1e-9 of the capacity is
    /// clamped to it; anything beyond is a [`FleetError::TankOverfill`].
    pub fn fill(&mut self, liters: f64) -> FleetResult<()> {
        if !(liters > 0.0) {
            return Err(FleetError::invalid_fill_amount(
                "Fill amount must be greater than zero.",
            ));
        }

        let new_level = self.current_level + liters;
        if new_level > self.capacity * (1.0 + FILL_TOLERANCE) {
            return Err(FleetError::TankOverfill {
                tank_id: self.id,
                attempted: liters,
                capacity: self.capacity,
            });
        }

        self.current_level = new_level.min(self.capacity);
        Ok(())
    }

    /// Drain the tank completely, returning the liters removed.
    pub fn fully_empty(&mut self) -> FleetResult<f64> {
        if self.is_empty() {
            return Err(FleetError::TankAlreadyEmpty(self.id));
        }
        let drained = self.current_level;
        self.current_level = 0.0;
        Ok(drained)
    }
}

impl Entity for Tank {
    type Id = TankId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
