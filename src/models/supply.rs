//! Supply-side model.
//!
//! A supply unit is the scarce resource being allocated: a staff member,
//! a mentor, a project slot. It carries interest tags used for
//! compatibility scoring and accumulates assigned demand units during
//! allocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit on the supply side of the allocation.
///
/// Assigned demand units are stored as indices into the demand arena
/// (see [`crate::models::DemandUnit`]), avoiding cross-reference cycles.
/// The `assigned` list starts empty and is appended to only by the
/// allocation engine, one entry per committed assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyUnit {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Interest tags, in declaration order.
    pub interests: Vec<String>,
    /// Indices of demand units assigned to this unit (commit order).
    #[serde(default)]
    pub assigned: Vec<usize>,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl SupplyUnit {
    /// Creates a new supply unit with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            interests: Vec::new(),
            assigned: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an interest tag.
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Replaces the interest tags.
    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Number of demand units currently assigned.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Whether this unit carries a given interest tag.
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Count of this unit's interest tags also present in `other`.
    pub fn interest_overlap(&self, other: &[String]) -> usize {
        self.interests
            .iter()
            .filter(|i| other.contains(i))
            .count()
    }
}
