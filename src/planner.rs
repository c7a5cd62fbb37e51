//! Capacity planning for the supply side.
//!
//! Derives one assignment ceiling per supply unit before the first
//! pass. Without fair-share the ceiling is simply the configured hard
//! cap. With fair-share the total slot demand is split as evenly as
//! possible across positions in the current iteration order, so the
//! planner must run after any order shuffling.

use crate::models::AllocationConfig;

/// Computes the per-position capacity ceilings.
///
/// `ceilings[i]` applies to the supply unit at position `i` of the
/// current iteration order.
///
/// Fair-share split: `total = demand_count × max_supply_per_demand`,
/// `base = total / supply_count`, `remainder = total % supply_count`;
/// the first `remainder` positions get `base + 1`, the rest `base`.
/// The hard cap still applies on top of the fair share.
pub fn plan_ceilings(
    supply_count: usize,
    demand_count: usize,
    config: &AllocationConfig,
) -> Vec<usize> {
    if !config.fair_share {
        return vec![config.max_demand_per_supply; supply_count];
    }
    if supply_count == 0 {
        return Vec::new();
    }

    let total = demand_count * config.max_supply_per_demand;
    let base = total / supply_count;
    let remainder = total % supply_count;

    (0..supply_count)
        .map(|i| {
            let fair = if i < remainder { base + 1 } else { base };
            fair.min(config.max_demand_per_supply)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_uses_hard_cap() {
        let config = AllocationConfig::new().with_max_demand_per_supply(7);
        assert_eq!(plan_ceilings(3, 10, &config), vec![7, 7, 7]);
    }

    #[test]
    fn test_fair_share_even_split() {
        let config = AllocationConfig::new()
            .with_fair_share(true)
            .with_max_demand_per_supply(10)
            .with_max_supply_per_demand(1);
        // 4 slots over 2 positions → 2 each
        assert_eq!(plan_ceilings(2, 4, &config), vec![2, 2]);
    }

    #[test]
    fn test_fair_share_remainder_to_leading_positions() {
        let config = AllocationConfig::new()
            .with_fair_share(true)
            .with_max_demand_per_supply(10)
            .with_max_supply_per_demand(1);
        // 3 slots over 2 positions → base 1, remainder 1 → [2, 1]
        assert_eq!(plan_ceilings(2, 3, &config), vec![2, 1]);
    }

    #[test]
    fn test_fair_share_scales_with_supply_per_demand() {
        let config = AllocationConfig::new()
            .with_fair_share(true)
            .with_max_demand_per_supply(10)
            .with_max_supply_per_demand(2);
        // 3 × 2 = 6 slots over 4 positions → base 1, remainder 2
        assert_eq!(plan_ceilings(4, 3, &config), vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_fair_share_capped_by_hard_cap() {
        let config = AllocationConfig::new()
            .with_fair_share(true)
            .with_max_demand_per_supply(2)
            .with_max_supply_per_demand(1);
        // Fair split would be [4, 3, 3] but the hard cap wins
        assert_eq!(plan_ceilings(3, 10, &config), vec![2, 2, 2]);
    }

    #[test]
    fn test_empty_supply() {
        let config = AllocationConfig::new().with_fair_share(true);
        assert!(plan_ceilings(0, 5, &config).is_empty());
    }
}
