//! Capacity-constrained bipartite allocation.
//!
//! Distributes a finite demand set (students, work requests) across a
//! finite supply set (staff, project slots) subject to per-side capacity
//! limits, a weighted multi-factor compatibility score, and an optional
//! fair-share constraint on supply-side load.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SupplyUnit`, `DemandUnit`,
//!   `AllocationConfig`, `AllocationOutcome`, `AssignmentRecord`
//! - **`scoring`**: Pairwise compatibility scores and the dense score matrix
//! - **`planner`**: Per-supply capacity ceilings (fair-share split)
//! - **`engine`**: The greedy pass-based assignment engine
//! - **`validation`**: Input integrity checks (capacities, weights, duplicate IDs)
//!
//! # Algorithm
//!
//! The engine is a deterministic greedy heuristic, not an optimal
//! matcher: each pass scans supply units in a fixed order, commits at
//! most one assignment (deferring any claim that a later unit with
//! spare capacity scores strictly higher on), rebuilds the full score
//! matrix, and restarts. A pass with zero commits terminates the run.
//!
//! # Example
//!
//! ```
//! use capalloc::engine::{AllocationRequest, GreedyAllocator};
//! use capalloc::models::{AllocationConfig, DemandUnit, SupplyUnit};
//!
//! let supply = vec![
//!     SupplyUnit::new("S1").with_interest("math"),
//!     SupplyUnit::new("S2").with_interest("art"),
//! ];
//! let demand = vec![
//!     DemandUnit::new("D1").with_interest("math").with_category("CS"),
//!     DemandUnit::new("D2").with_interest("art").with_category("EE"),
//! ];
//! let request = AllocationRequest::new(supply, demand)
//!     .with_config(AllocationConfig::new().with_max_demand_per_supply(2));
//!
//! let outcome = GreedyAllocator::new().allocate(request).unwrap();
//! assert_eq!(outcome.assignment_count(), 2);
//! ```
//!
//! # References
//!
//! - Korte & Vygen (2018), "Combinatorial Optimization", Ch. 10-11 (bipartite matching)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4 (priority dispatching)

pub mod engine;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod validation;
