//! Pairwise compatibility scoring and the score matrix.
//!
//! The score of a (supply, demand) pair combines three sub-scores
//! linearly:
//!
//! - **Interest**: fraction of the supply unit's interest tags shared by
//!   the demand unit (0 when the supply unit has no tags).
//! - **Category**: 1 when the demand unit's category is not yet present
//!   among the supply unit's current assignments, else 0. Rewards
//!   category diversity per supply unit.
//! - **Performance**: `1 − |mean − average| / average`, where `mean` is
//!   the performance mean over the supply unit's current assignments
//!   plus the candidate (unreported values count as 0). Rewards
//!   assignments that keep each supply unit's group near the population
//!   average.
//!
//! An infeasible pair scores exactly [`INFEASIBLE`] (−1). Combined
//! scores are not clamped and may go negative through the performance
//! term; that is distinct from the sentinel.

use crate::models::{AllocationConfig, DemandUnit, SupplyUnit};

/// Sentinel score for a pair that cannot be assigned.
pub const INFEASIBLE: f64 = -1.0;

/// Scoring inputs derived once per allocation run.
///
/// Carries the configured weights plus the population performance
/// average. When no demand unit reports a performance value — or the
/// reported values average to zero — the performance term is disabled
/// (`performance_weight` forced to 0) and the average defaults to 1.
#[derive(Debug, Clone)]
pub struct ScoringParams {
    /// Weight of the interest sub-score.
    pub interest_weight: f64,
    /// Weight of the category sub-score.
    pub category_weight: f64,
    /// Weight of the performance sub-score.
    pub performance_weight: f64,
    /// Mean performance over demand units that report one.
    pub average_performance: f64,
}

impl ScoringParams {
    /// Derives scoring parameters from the configuration and demand arena.
    pub fn derive(config: &AllocationConfig, demand: &[DemandUnit]) -> Self {
        let reported: Vec<f64> = demand.iter().filter_map(|d| d.performance).collect();
        let average = if reported.is_empty() {
            0.0
        } else {
            reported.iter().sum::<f64>() / reported.len() as f64
        };

        if average == 0.0 {
            // No usable baseline; the performance term contributes nothing.
            Self {
                interest_weight: config.interest_weight,
                category_weight: config.category_weight,
                performance_weight: 0.0,
                average_performance: 1.0,
            }
        } else {
            Self {
                interest_weight: config.interest_weight,
                category_weight: config.category_weight,
                performance_weight: config.performance_weight,
                average_performance: average,
            }
        }
    }
}

/// Scores one (supply, candidate demand) pair against the current
/// assignment state.
///
/// Infeasibility checks, first match wins:
/// 1. Supply unit at or above its ceiling.
/// 2. Candidate at or above the supply-per-demand cap.
/// 3. Candidate already assigned to this supply unit.
///
/// Returns [`INFEASIBLE`] for any of the above, otherwise the weighted
/// sub-score sum.
pub fn score_pair(
    supply: &SupplyUnit,
    candidate: usize,
    demand: &[DemandUnit],
    ceiling: usize,
    max_supply_per_demand: usize,
    params: &ScoringParams,
) -> f64 {
    let unit = &demand[candidate];

    if supply.assigned.len() >= ceiling {
        return INFEASIBLE;
    }
    if unit.assigned.len() >= max_supply_per_demand {
        return INFEASIBLE;
    }
    if supply.assigned.contains(&candidate) {
        return INFEASIBLE;
    }

    interest_score(supply, unit) * params.interest_weight
        + category_score(supply, unit, demand) * params.category_weight
        + performance_score(supply, unit, demand, params.average_performance)
            * params.performance_weight
}

fn interest_score(supply: &SupplyUnit, unit: &DemandUnit) -> f64 {
    if supply.interests.is_empty() {
        return 0.0;
    }
    supply.interest_overlap(&unit.interests) as f64 / supply.interests.len() as f64
}

fn category_score(supply: &SupplyUnit, unit: &DemandUnit, demand: &[DemandUnit]) -> f64 {
    let seen = supply
        .assigned
        .iter()
        .any(|&d| demand[d].category == unit.category);
    if seen {
        0.0
    } else {
        1.0
    }
}

fn performance_score(
    supply: &SupplyUnit,
    unit: &DemandUnit,
    demand: &[DemandUnit],
    average: f64,
) -> f64 {
    let mut sum = unit.performance_or_zero();
    for &d in &supply.assigned {
        sum += demand[d].performance_or_zero();
    }
    let mean = sum / (supply.assigned.len() + 1) as f64;
    1.0 - (mean - average).abs() / average
}

/// Dense supply × demand score table.
///
/// Rebuilt in full after every committed assignment; no incremental
/// update is attempted, so every cell always reflects the current
/// assigned-lists.
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    rows: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    /// Builds a fresh matrix by scoring every pair against the current
    /// assignment state. `ceilings[i]` is the capacity ceiling of
    /// `supply[i]`.
    pub fn build(
        supply: &[SupplyUnit],
        demand: &[DemandUnit],
        ceilings: &[usize],
        max_supply_per_demand: usize,
        params: &ScoringParams,
    ) -> Self {
        let rows = supply
            .iter()
            .enumerate()
            .map(|(i, s)| {
                (0..demand.len())
                    .map(|d| score_pair(s, d, demand, ceilings[i], max_supply_per_demand, params))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Score of the (supply `i`, demand `d`) cell.
    #[inline]
    pub fn get(&self, i: usize, d: usize) -> f64 {
        self.rows[i][d]
    }

    /// Best entry of row `i`: `(demand_index, score)`.
    ///
    /// Ties resolve to the first (lowest) demand index. Returns `None`
    /// for an empty row.
    pub fn best_in_row(&self, i: usize) -> Option<(usize, f64)> {
        let row = &self.rows[i];
        let mut best: Option<(usize, f64)> = None;
        for (d, &score) in row.iter().enumerate() {
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((d, score)),
            }
        }
        best
    }

    /// Number of supply rows.
    pub fn supply_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of demand columns.
    pub fn demand_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(interest: f64, category: f64, performance: f64, average: f64) -> ScoringParams {
        ScoringParams {
            interest_weight: interest,
            category_weight: category,
            performance_weight: performance,
            average_performance: average,
        }
    }

    #[test]
    fn test_derive_average_performance() {
        let config = AllocationConfig::default();
        let demand = vec![
            DemandUnit::new("D1").with_performance(2.0),
            DemandUnit::new("D2").with_performance(4.0),
            DemandUnit::new("D3"), // unreported, excluded from the average
        ];
        let p = ScoringParams::derive(&config, &demand);
        assert!((p.average_performance - 3.0).abs() < 1e-10);
        assert!((p.performance_weight - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_derive_no_reported_performance() {
        let config = AllocationConfig::default();
        let demand = vec![DemandUnit::new("D1"), DemandUnit::new("D2")];
        let p = ScoringParams::derive(&config, &demand);
        assert!((p.average_performance - 1.0).abs() < 1e-10);
        assert!((p.performance_weight - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_derive_zero_average_disables_term() {
        let config = AllocationConfig::default();
        let demand = vec![DemandUnit::new("D1").with_performance(0.0)];
        let p = ScoringParams::derive(&config, &demand);
        assert!((p.average_performance - 1.0).abs() < 1e-10);
        assert!((p.performance_weight - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_interest_score_fraction() {
        let supply = SupplyUnit::new("S1")
            .with_interest("math")
            .with_interest("art");
        let demand = vec![DemandUnit::new("D1").with_interest("math")];
        let p = params(1.0, 0.0, 0.0, 1.0);

        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!((score - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_interest_score_no_tags() {
        let supply = SupplyUnit::new("S1");
        let demand = vec![DemandUnit::new("D1").with_interest("math")];
        let p = params(1.0, 0.0, 0.0, 1.0);

        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!((score - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_category_score_diversity() {
        let mut supply = SupplyUnit::new("S1");
        let demand = vec![
            DemandUnit::new("D1").with_category("CS"),
            DemandUnit::new("D2").with_category("CS"),
            DemandUnit::new("D3").with_category("EE"),
        ];
        let p = params(0.0, 1.0, 0.0, 1.0);

        // Nothing assigned yet: any category is new.
        assert!((score_pair(&supply, 0, &demand, 10, 1, &p) - 1.0).abs() < 1e-10);

        supply.assigned.push(0);
        // Same category as an existing assignment scores 0, a new one 1.
        assert!((score_pair(&supply, 1, &demand, 10, 2, &p) - 0.0).abs() < 1e-10);
        assert!((score_pair(&supply, 2, &demand, 10, 1, &p) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_performance_score_deviation() {
        let supply = SupplyUnit::new("S1");
        let demand = vec![DemandUnit::new("D1").with_performance(2.0)];
        let p = params(0.0, 0.0, 1.0, 3.0);

        // mean = 2, average = 3 → 1 − 1/3
        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!((score - (1.0 - 1.0 / 3.0)).abs() < 1e-10);
    }

    #[test]
    fn test_performance_score_includes_assigned() {
        let mut supply = SupplyUnit::new("S1");
        supply.assigned.push(1);
        let demand = vec![
            DemandUnit::new("D1").with_performance(4.0),
            DemandUnit::new("D2").with_performance(2.0),
        ];
        let p = params(0.0, 0.0, 1.0, 3.0);

        // mean = (4 + 2) / 2 = 3 = average → full score
        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!((score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_performance_score_missing_counts_as_zero() {
        let supply = SupplyUnit::new("S1");
        let demand = vec![DemandUnit::new("D1")];
        let p = params(0.0, 0.0, 1.0, 2.0);

        // mean = 0, average = 2 → 1 − 2/2 = 0
        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!((score - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_combined_score_can_go_negative() {
        let supply = SupplyUnit::new("S1");
        let demand = vec![DemandUnit::new("D1").with_performance(10.0)];
        let p = params(0.0, 0.0, 1.0, 1.0);

        // mean = 10, average = 1 → 1 − 9 = −8, distinct from the sentinel
        let score = score_pair(&supply, 0, &demand, 10, 1, &p);
        assert!(score < 0.0);
        assert!((score - INFEASIBLE).abs() > 1e-10);
    }

    #[test]
    fn test_infeasible_supply_at_ceiling() {
        let mut supply = SupplyUnit::new("S1").with_interest("math");
        supply.assigned.push(1);
        let demand = vec![
            DemandUnit::new("D1").with_interest("math"),
            DemandUnit::new("D2"),
        ];
        let p = params(1.0, 0.0, 0.0, 1.0);

        assert_eq!(score_pair(&supply, 0, &demand, 1, 5, &p), INFEASIBLE);
    }

    #[test]
    fn test_infeasible_demand_at_cap() {
        let supply = SupplyUnit::new("S1").with_interest("math");
        let mut unit = DemandUnit::new("D1").with_interest("math");
        unit.assigned.push(7);
        let demand = vec![unit];
        let p = params(1.0, 0.0, 0.0, 1.0);

        assert_eq!(score_pair(&supply, 0, &demand, 5, 1, &p), INFEASIBLE);
    }

    #[test]
    fn test_infeasible_already_paired() {
        let mut supply = SupplyUnit::new("S1").with_interest("math");
        supply.assigned.push(0);
        let demand = vec![DemandUnit::new("D1").with_interest("math")];
        let p = params(1.0, 0.0, 0.0, 1.0);

        assert_eq!(score_pair(&supply, 0, &demand, 5, 5, &p), INFEASIBLE);
    }

    #[test]
    fn test_matrix_build_shape() {
        let supply = vec![
            SupplyUnit::new("S1").with_interest("math"),
            SupplyUnit::new("S2").with_interest("art"),
        ];
        let demand = vec![
            DemandUnit::new("D1").with_interest("math"),
            DemandUnit::new("D2").with_interest("art"),
            DemandUnit::new("D3"),
        ];
        let p = params(1.0, 0.0, 0.0, 1.0);

        let m = ScoreMatrix::build(&supply, &demand, &[2, 2], 1, &p);
        assert_eq!(m.supply_count(), 2);
        assert_eq!(m.demand_count(), 3);
        assert!((m.get(0, 0) - 1.0).abs() < 1e-10);
        assert!((m.get(1, 1) - 1.0).abs() < 1e-10);
        assert!((m.get(0, 1) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_best_in_row_first_index_tie_break() {
        let m = ScoreMatrix {
            rows: vec![vec![0.5, 1.0, 1.0, 0.2]],
        };
        assert_eq!(m.best_in_row(0), Some((1, 1.0)));
    }

    #[test]
    fn test_best_in_row_all_infeasible() {
        let m = ScoreMatrix {
            rows: vec![vec![INFEASIBLE, INFEASIBLE]],
        };
        let (d, score) = m.best_in_row(0).unwrap();
        assert_eq!(d, 0);
        assert!(score < 0.0);
    }

    #[test]
    fn test_best_in_row_empty() {
        let m = ScoreMatrix { rows: vec![vec![]] };
        assert_eq!(m.best_in_row(0), None);
    }
}
