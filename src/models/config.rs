//! Fleet configuration.
//!
//! Process-wide operating parameters: vehicle seat capacity and the two
//! cost rates feeding per-trip operating cost. Built once, passed by
//! reference, never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Immutable fleet-wide operating parameters.
///
/// The defaults describe the surveyed fleet: 38-seat vehicles, fuel at
/// 3.74 currency units per liter-equivalent, maintenance at 20 per
/// operating hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Vehicle seat capacity. Every observed passenger load must stay
    /// within this bound; assumed positive.
    pub capacity: u32,
    /// Fuel cost per liter-equivalent consumed.
    pub fuel_cost_per_unit: f64,
    /// Maintenance cost per operating hour.
    pub maintenance_cost_per_hour: f64,
}

impl FleetConfig {
    /// Sets the vehicle seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the fuel cost per unit.
    pub fn with_fuel_cost(mut self, fuel_cost_per_unit: f64) -> Self {
        self.fuel_cost_per_unit = fuel_cost_per_unit;
        self
    }

    /// Sets the maintenance cost per hour.
    pub fn with_maintenance_cost(mut self, maintenance_cost_per_hour: f64) -> Self {
        self.maintenance_cost_per_hour = maintenance_cost_per_hour;
        self
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            capacity: 38,
            fuel_cost_per_unit: 3.74,
            maintenance_cost_per_hour: 20.0,
        }
    }
}
