//! The step-wise search instance.

use crate::contract::SearchSpaceV1;
use crate::frontier::{ExploreOrder, FrontierV1};
use crate::stats::SearchStatsV1;

/// A frontier-driven tree search that advances one decision per call.
///
/// Bundles the frontier, the incumbent solution, the space callbacks, and
/// the retained initial node. The caller owns the loop: keep calling
/// [`TreeSearchV1::step`] until [`TreeSearchV1::is_exhausted`], or stop
/// earlier and read [`TreeSearchV1::best`] for an anytime answer.
///
/// Callback panics propagate unmodified — a panic in `successors` or
/// `is_goal` is a programming error in the encoding layer and aborts the
/// search rather than being absorbed.
pub struct TreeSearchV1<S: SearchSpaceV1> {
    space: S,
    initial: S::Node,
    frontier: FrontierV1<S::Node>,
    incumbent: Option<S::Node>,
    stats: SearchStatsV1,
}

impl<S: SearchSpaceV1> TreeSearchV1<S> {
    /// Create a search whose frontier holds exactly `initial`.
    #[must_use]
    pub fn new(initial: S::Node, space: S, order: ExploreOrder) -> Self {
        let mut frontier = FrontierV1::new(order);
        frontier.push(initial.clone());
        Self {
            space,
            initial,
            frontier,
            incumbent: None,
            stats: SearchStatsV1::default(),
        }
    }

    /// Advance the search by exactly one frontier removal.
    ///
    /// Returns `true` exactly when the removed node became the new
    /// incumbent (a new best solution was found). Safe to call after
    /// exhaustion: an empty frontier returns `false` and changes nothing.
    ///
    /// A removed node that passes the goal test is terminal whether or not
    /// it improves the incumbent — `successors` is never called on it.
    pub fn step(&mut self) -> bool {
        let Some(node) = self.frontier.take() else {
            return false;
        };
        self.stats.steps += 1;

        if self.space.is_goal(&node) {
            self.stats.goal_hits += 1;
            let improves = match self.incumbent.as_ref() {
                None => true,
                Some(best) => self.space.improves(&node, best),
            };
            if improves {
                self.incumbent = Some(node);
                self.stats.improvements += 1;
                return true;
            }
            return false;
        }

        let children = self.space.successors(&node);
        self.stats.expansions += 1;
        self.stats.successors_generated += children.len() as u64;
        for child in children {
            self.frontier.push(child);
        }
        false
    }

    /// Whether no nodes remain to ever consider.
    ///
    /// Derived from frontier occupancy, never stored: `false` right after
    /// construction (the initial node is pending) and `true` once the last
    /// node has been drained.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The best goal node found so far, or `None` before any goal.
    #[must_use]
    pub fn best(&self) -> Option<&S::Node> {
        self.incumbent.as_ref()
    }

    /// Discard all progress and restore the initial configuration.
    ///
    /// The frontier holds only the original initial node again, the
    /// incumbent is cleared, and the counters are zeroed. The space
    /// callbacks and the exploration order are retained.
    pub fn reset(&mut self) {
        let order = self.frontier.order();
        self.frontier = FrontierV1::new(order);
        self.frontier.push(self.initial.clone());
        self.incumbent = None;
        self.stats = SearchStatsV1::default();
    }

    /// The exploration order fixed at construction.
    #[must_use]
    pub fn order(&self) -> ExploreOrder {
        self.frontier.order()
    }

    /// Current number of pending frontier nodes.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// High-water mark of frontier size since construction or last reset.
    #[must_use]
    pub fn frontier_high_water(&self) -> u64 {
        self.frontier.high_water()
    }

    /// Step counters since construction or last reset.
    #[must_use]
    pub fn stats(&self) -> &SearchStatsV1 {
        &self.stats
    }

    /// The space callbacks this search was built with.
    #[must_use]
    pub fn space(&self) -> &S {
        &self.space
    }
}
