//! Integer step counters for one search run.

/// Counters updated by [`crate::engine::TreeSearchV1::step`].
///
/// All fields are integers so the struct can be embedded in a
/// canonically-hashed run report without formatting drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatsV1 {
    /// Nodes removed from the frontier (one per non-empty step).
    pub steps: u64,
    /// Non-goal removals that had their successors generated.
    pub expansions: u64,
    /// Total successors appended across all expansions.
    pub successors_generated: u64,
    /// Removals that passed the goal test, improving or not.
    pub goal_hits: u64,
    /// Goal removals that replaced the incumbent.
    pub improvements: u64,
}

impl SearchStatsV1 {
    /// Integer-only JSON mapping for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "steps": self.steps,
            "expansions": self.expansions,
            "successors_generated": self.successors_generated,
            "goal_hits": self.goal_hits,
            "improvements": self.improvements,
        })
    }
}
