//! Greedy pass-based allocation engine.
//!
//! # Algorithm
//!
//! 1. Validate the input; shuffle the supply order once if requested.
//! 2. Plan per-position capacity ceilings and derive scoring parameters.
//! 3. Build the full score matrix, then run passes: scan supply units in
//!    order, pick each unit's best-scoring demand candidate, and commit
//!    it unless a later unit with spare capacity scores strictly higher
//!    on the same candidate (deferral — the stronger claim goes first).
//! 4. At most one commit per pass; every commit rebuilds the matrix and
//!    restarts scanning from position 0. A pass with zero commits
//!    terminates the run.
//!
//! Committing once per pass and always rescanning from the top keeps
//! every commit consistent with the globally current state — no commit
//! ever uses stale scores. The cost is O(passes × S × D) work, which is
//! acceptable at organizational member counts. Each pass either commits
//! one assignment (consuming remaining capacity) or halts, so the pass
//! count is bounded by the smaller side's total capacity and termination
//! is guaranteed.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::models::{
    AllocationConfig, AllocationOutcome, AssignmentRecord, DemandUnit, SupplyUnit,
};
use crate::planner::plan_ceilings;
use crate::scoring::{ScoreMatrix, ScoringParams};
use crate::validation::{validate_input, ValidationError};

/// Input container for an allocation run.
///
/// The engine takes ownership: assigned-lists are mutated in place, so
/// each run operates on its own copy of both arenas.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    /// Supply arena.
    pub supply: Vec<SupplyUnit>,
    /// Demand arena.
    pub demand: Vec<DemandUnit>,
    /// Run configuration.
    pub config: AllocationConfig,
}

impl AllocationRequest {
    /// Creates a request with the default configuration.
    pub fn new(supply: Vec<SupplyUnit>, demand: Vec<DemandUnit>) -> Self {
        Self {
            supply,
            demand,
            config: AllocationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AllocationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Scanning state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    /// Passes are still producing commits.
    Scanning,
    /// A full pass committed nothing; the run is complete.
    Terminated,
}

/// Greedy pass-based allocator.
///
/// Stateless between runs; one invocation processes one complete
/// request from start to termination with no suspension points.
///
/// # Example
///
/// ```
/// use capalloc::engine::{AllocationRequest, GreedyAllocator};
/// use capalloc::models::{AllocationConfig, DemandUnit, SupplyUnit};
///
/// let supply = vec![SupplyUnit::new("S1").with_interest("math")];
/// let demand = vec![DemandUnit::new("D1").with_interest("math")];
/// let request = AllocationRequest::new(supply, demand);
///
/// let outcome = GreedyAllocator::new().allocate(request).unwrap();
/// assert_eq!(outcome.assignment_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Runs an allocation using a thread-local RNG for order shuffling.
    pub fn allocate(
        &self,
        request: AllocationRequest,
    ) -> Result<AllocationOutcome, Vec<ValidationError>> {
        self.allocate_with_rng(request, &mut rand::rng())
    }

    /// Runs an allocation with a caller-supplied RNG.
    ///
    /// The RNG is consulted only when `randomize_order` is set; seeding
    /// it makes randomized runs reproducible.
    pub fn allocate_with_rng<R: Rng>(
        &self,
        request: AllocationRequest,
        rng: &mut R,
    ) -> Result<AllocationOutcome, Vec<ValidationError>> {
        let AllocationRequest {
            mut supply,
            mut demand,
            config,
        } = request;

        validate_input(&supply, &demand, &config)?;

        // Iteration order is fixed for the whole run; ceilings and matrix
        // rows follow the post-shuffle order.
        if config.randomize_order {
            supply.shuffle(rng);
        }

        let mut assignments = Vec::new();
        if supply.is_empty() || demand.is_empty() {
            return Ok(AllocationOutcome::new(supply, demand, assignments));
        }

        let ceilings = plan_ceilings(supply.len(), demand.len(), &config);
        let params = ScoringParams::derive(&config, &demand);
        let mut matrix = ScoreMatrix::build(
            &supply,
            &demand,
            &ceilings,
            config.max_supply_per_demand,
            &params,
        );

        let mut state = EngineState::Scanning;
        let mut passes = 0usize;

        while state == EngineState::Scanning {
            passes += 1;
            let mut committed = false;

            for i in 0..supply.len() {
                let Some((candidate, best_score)) = matrix.best_in_row(i) else {
                    continue;
                };
                if best_score < 0.0 {
                    continue;
                }

                // Deferral: a later unit with spare capacity and a strictly
                // higher score holds the stronger claim on this candidate.
                let deferred = (i + 1..supply.len()).any(|j| {
                    matrix.get(j, candidate) > best_score
                        && supply[j].assigned.len() < ceilings[j]
                });
                if deferred {
                    trace!(
                        pass = passes,
                        supply = %supply[i].id,
                        demand = %demand[candidate].id,
                        "claim deferred to a later supply unit"
                    );
                    continue;
                }

                supply[i].assigned.push(candidate);
                demand[candidate].assigned.push(i);
                assignments.push(AssignmentRecord::new(
                    supply[i].id.clone(),
                    demand[candidate].id.clone(),
                ));
                debug!(
                    pass = passes,
                    supply = %supply[i].id,
                    demand = %demand[candidate].id,
                    score = best_score,
                    "committed assignment"
                );

                matrix = ScoreMatrix::build(
                    &supply,
                    &demand,
                    &ceilings,
                    config.max_supply_per_demand,
                    &params,
                );
                committed = true;
                break; // One commit per pass; rescan from position 0.
            }

            if !committed {
                state = EngineState::Terminated;
            }
        }

        debug!(
            passes,
            assignments = assignments.len(),
            "allocation terminated"
        );
        Ok(AllocationOutcome::new(supply, demand, assignments))
    }
}
