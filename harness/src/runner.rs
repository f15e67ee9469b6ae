//! The driving protocol: loop `step()` under a caller-imposed budget.
//!
//! The engine has no budget or timeout logic of its own; the driver owns
//! the loop and may stop early at any point, reading the incumbent for an
//! anytime answer.

use cairn_search::contract::SearchSpaceV1;
use cairn_search::engine::TreeSearchV1;

/// External stopping conditions for one drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveBudgetV1 {
    /// Maximum number of steps to take, or `None` for unbounded.
    pub max_steps: Option<u64>,
    /// Stop as soon as the first incumbent is installed. Useful for
    /// depth-first searches without a comparator, where the first goal
    /// found is the final answer.
    pub stop_at_first_goal: bool,
}

impl Default for DriveBudgetV1 {
    /// Exhaustive drive: no step cap, run until the frontier drains.
    fn default() -> Self {
        Self {
            max_steps: None,
            stop_at_first_goal: false,
        }
    }
}

/// Why a drive stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReasonV1 {
    /// The frontier drained; no nodes remain to ever consider.
    Exhausted,
    /// The step budget was spent before exhaustion.
    StepBudgetReached,
    /// The first incumbent was installed and the budget asked to stop there.
    FirstGoalFound,
}

impl StopReasonV1 {
    /// Stable lowercase label used in hashed run reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::StepBudgetReached => "step_budget_reached",
            Self::FirstGoalFound => "first_goal_found",
        }
    }
}

/// Outcome of one drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveOutcomeV1 {
    /// Steps taken by this drive (not cumulative across drives).
    pub steps: u64,
    /// Incumbent replacements observed by this drive.
    pub improvements: u64,
    /// Why the drive stopped.
    pub stop_reason: StopReasonV1,
}

/// Drive a search until exhaustion or until the budget stops it.
pub fn drive<S: SearchSpaceV1>(
    search: &mut TreeSearchV1<S>,
    budget: &DriveBudgetV1,
) -> DriveOutcomeV1 {
    let mut steps = 0u64;
    let mut improvements = 0u64;
    loop {
        if search.is_exhausted() {
            return DriveOutcomeV1 {
                steps,
                improvements,
                stop_reason: StopReasonV1::Exhausted,
            };
        }
        if budget.max_steps.is_some_and(|max| steps >= max) {
            return DriveOutcomeV1 {
                steps,
                improvements,
                stop_reason: StopReasonV1::StepBudgetReached,
            };
        }
        let improved = search.step();
        steps += 1;
        if improved {
            improvements += 1;
            if budget.stop_at_first_goal {
                return DriveOutcomeV1 {
                    steps,
                    improvements,
                    stop_reason: StopReasonV1::FirstGoalFound,
                };
            }
        }
    }
}

/// Drive a search all the way to frontier exhaustion.
pub fn run_to_exhaustion<S: SearchSpaceV1>(search: &mut TreeSearchV1<S>) -> DriveOutcomeV1 {
    drive(search, &DriveBudgetV1::default())
}
