//! Allocation outcome model.
//!
//! The outcome is the complete result of one allocation run: both sides
//! with populated assigned-lists plus an ordered assignment log. The log
//! order is the commit order, not sorted by any other key.

use serde::{Deserialize, Serialize};

use super::{DemandUnit, SupplyUnit};

/// One committed assignment, recorded at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// ID of the supply unit that received the demand unit.
    pub supply_id: String,
    /// ID of the assigned demand unit.
    pub demand_id: String,
}

impl AssignmentRecord {
    /// Creates a new record.
    pub fn new(supply_id: impl Into<String>, demand_id: impl Into<String>) -> Self {
        Self {
            supply_id: supply_id.into(),
            demand_id: demand_id.into(),
        }
    }
}

/// Complete result of an allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Supply units in final iteration order, with populated assigned-lists.
    pub supply: Vec<SupplyUnit>,
    /// Demand units in input order, with populated assigned-lists.
    pub demand: Vec<DemandUnit>,
    /// Assignment log in commit order.
    pub assignments: Vec<AssignmentRecord>,
}

impl AllocationOutcome {
    /// Creates an outcome.
    pub fn new(
        supply: Vec<SupplyUnit>,
        demand: Vec<DemandUnit>,
        assignments: Vec<AssignmentRecord>,
    ) -> Self {
        Self {
            supply,
            demand,
            assignments,
        }
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns all assignment records for a given supply unit.
    pub fn assignments_for_supply(&self, supply_id: &str) -> Vec<&AssignmentRecord> {
        self.assignments
            .iter()
            .filter(|a| a.supply_id == supply_id)
            .collect()
    }

    /// Returns all assignment records for a given demand unit.
    pub fn assignments_for_demand(&self, demand_id: &str) -> Vec<&AssignmentRecord> {
        self.assignments
            .iter()
            .filter(|a| a.demand_id == demand_id)
            .collect()
    }

    /// Per-supply-unit assigned counts, in supply order.
    pub fn assigned_counts(&self) -> Vec<usize> {
        self.supply.iter().map(|s| s.assigned_count()).collect()
    }

    /// Spread of the supply-side load: `max(counts) − min(counts)`.
    ///
    /// Returns 0 for an empty supply side. Under fair-share ceilings the
    /// spread is at most 1 after termination.
    pub fn load_spread(&self) -> usize {
        let counts = self.assigned_counts();
        match (counts.iter().max(), counts.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    /// Demand units that received no assignment.
    pub fn unassigned_demand(&self) -> Vec<&DemandUnit> {
        self.demand.iter().filter(|d| d.assigned.is_empty()).collect()
    }
}
