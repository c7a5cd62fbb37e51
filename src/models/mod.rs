//! Allocation domain models.
//!
//! Provides the core data types for representing bipartite allocation
//! problems and their results. Domain-agnostic within allocation —
//! applicable to mentoring, staffing, and work-distribution problems.
//!
//! # Domain Mappings
//!
//! | capalloc | Education | Staffing | Work distribution |
//! |------------|-----------|----------|-------------------|
//! | SupplyUnit | Mentor | Staff member | Project slot |
//! | DemandUnit | Student | New hire | Work request |
//! | AssignmentRecord | Pairing | Placement | Dispatch |
//!
//! Both sides are stored as flat arenas; assigned-lists hold indices
//! into the opposite arena rather than references.

mod config;
mod demand;
mod outcome;
mod supply;

pub use config::AllocationConfig;
pub use demand::DemandUnit;
pub use outcome::{AllocationOutcome, AssignmentRecord};
pub use supply::SupplyUnit;
