//! Demand-side model.
//!
//! A demand unit is the entity requesting allocation: a student, a work
//! request, a task. It carries interest tags, a category for diversity
//! scoring, and an optional performance value used by the performance
//! balance term.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit on the demand side of the allocation.
///
/// Assigned supply units are stored as indices into the supply arena.
/// The `assigned` list starts empty and is appended to only by the
/// allocation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandUnit {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Interest tags, in declaration order.
    pub interests: Vec<String>,
    /// Category or department tag (drives the diversity sub-score).
    pub category: String,
    /// Performance value in an application-defined range. `None` = not reported.
    pub performance: Option<f64>,
    /// Indices of supply units assigned to this unit (commit order).
    #[serde(default)]
    pub assigned: Vec<usize>,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl DemandUnit {
    /// Creates a new demand unit with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            interests: Vec::new(),
            category: String::new(),
            performance: None,
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

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the performance value.
    pub fn with_performance(mut self, performance: f64) -> Self {
        self.performance = Some(performance);
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Number of supply units currently assigned.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Performance value, treating an unreported value as 0.
    #[inline]
    pub fn performance_or_zero(&self) -> f64 {
        self.performance.unwrap_or(0.0)
    }
}
