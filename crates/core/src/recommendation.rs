//! Derived "what to read next" output. Never persisted.

use serde::{Deserialize, Serialize};

/// Coarse ranking signal used only for list ordering.
///
/// Declaration order doubles as sort order: `High` sorts before
/// `Medium`, `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Ready to read now
    High,
    /// Unlocked but not the obvious next step
    Medium,
    /// Background suggestion
    Low,
}

impl Priority {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One ranked reading suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Recommended unit
    pub unit_id: String,

    /// Display title of the unit
    pub title: String,

    /// Human-readable explanation for the suggestion
    pub reason: String,

    /// Ranking signal
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_sort_order() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(Priority::Medium.as_str(), "medium");
    }
}
