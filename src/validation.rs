//! Input validation for allocation runs.
//!
//! Checks configuration and arena integrity before any pass begins.
//! All detected problems are collected and returned together; no
//! partial allocation is produced on failure. Detects:
//! - Zero capacities
//! - Empty supply side with pending demand
//! - Negative scoring weights
//! - Duplicate IDs on either side
//! - Negative reported performance values

use thiserror::Error;

use crate::models::{AllocationConfig, DemandUnit, SupplyUnit};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A capacity limit is zero.
    InvalidCapacity,
    /// Demand exists but the supply side is empty.
    EmptySupply,
    /// A scoring weight is negative.
    InvalidWeight,
    /// Two units on the same side share an ID.
    DuplicateId,
    /// A demand unit reports a negative performance value.
    InvalidPerformance,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of an allocation run.
///
/// Checks:
/// 1. `max_demand_per_supply` and `max_supply_per_demand` are at least 1
/// 2. The supply side is non-empty whenever the demand side is
/// 3. All three scoring weights are non-negative
/// 4. No duplicate supply IDs, no duplicate demand IDs
/// 5. Reported performance values are non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    supply: &[SupplyUnit],
    demand: &[DemandUnit],
    config: &AllocationConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if config.max_demand_per_supply == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            "max_demand_per_supply must be at least 1",
        ));
    }
    if config.max_supply_per_demand == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            "max_supply_per_demand must be at least 1",
        ));
    }

    if supply.is_empty() && !demand.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySupply,
            format!("{} demand unit(s) but no supply units", demand.len()),
        ));
    }

    for (name, weight) in [
        ("interest_weight", config.interest_weight),
        ("category_weight", config.category_weight),
        ("performance_weight", config.performance_weight),
    ] {
        if weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("{name} must be non-negative, got {weight}"),
            ));
        }
    }

    let mut supply_ids = HashSet::new();
    for s in supply {
        if !supply_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate supply ID: {}", s.id),
            ));
        }
    }

    let mut demand_ids = HashSet::new();
    for d in demand {
        if !demand_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate demand ID: {}", d.id),
            ));
        }
        if let Some(p) = d.performance {
            if p < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPerformance,
                    format!("Demand unit '{}' reports negative performance {p}", d.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
