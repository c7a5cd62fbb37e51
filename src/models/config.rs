//! Allocation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one allocation run.
///
/// All fields have defaults, so a partial JSON document deserializes
/// cleanly: capacities default to 1, both flags to `false`, and the
/// weights to `interest = 1.0`, `category = 0.5`, `performance = 0.5`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Hard cap on demand units per supply unit (≥ 1).
    pub max_demand_per_supply: usize,
    /// Cap on supply units per demand unit (≥ 1).
    pub max_supply_per_demand: usize,
    /// Balance supply-side load so counts differ by at most one.
    pub fair_share: bool,
    /// Shuffle supply iteration order once at the start of a run.
    pub randomize_order: bool,
    /// Weight of the interest-overlap sub-score (≥ 0).
    pub interest_weight: f64,
    /// Weight of the category-diversity sub-score (≥ 0).
    pub category_weight: f64,
    /// Weight of the performance-balance sub-score (≥ 0).
    pub performance_weight: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_demand_per_supply: 1,
            max_supply_per_demand: 1,
            fair_share: false,
            randomize_order: false,
            interest_weight: 1.0,
            category_weight: 0.5,
            performance_weight: 0.5,
        }
    }
}

impl AllocationConfig {
    /// Creates a configuration with default weights and unit capacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the demand-per-supply cap.
    pub fn with_max_demand_per_supply(mut self, max: usize) -> Self {
        self.max_demand_per_supply = max;
        self
    }

    /// Sets the supply-per-demand cap.
    pub fn with_max_supply_per_demand(mut self, max: usize) -> Self {
        self.max_supply_per_demand = max;
        self
    }

    /// Enables or disables fair-share ceilings.
    pub fn with_fair_share(mut self, fair_share: bool) -> Self {
        self.fair_share = fair_share;
        self
    }

    /// Enables or disables iteration-order shuffling.
    pub fn with_randomize_order(mut self, randomize: bool) -> Self {
        self.randomize_order = randomize;
        self
    }

    /// Sets the three scoring weights at once.
    pub fn with_weights(mut self, interest: f64, category: f64, performance: f64) -> Self {
        self.interest_weight = interest;
        self.category_weight = category;
        self.performance_weight = performance;
        self
    }
}
