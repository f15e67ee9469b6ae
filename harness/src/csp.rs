//! Generic fixed-variable CSP encoding.
//!
//! A CSP world fixes an ordered list of variables, per-variable candidate
//! values, and a constraints predicate over partial assignments. The
//! generic space extends the assignment by one variable at a time in that
//! fixed order; the goal is "every variable assigned".

use std::collections::BTreeMap;

use cairn_search::contract::SearchSpaceV1;
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;

/// A partial assignment from variable to value.
///
/// `BTreeMap` keeps iteration deterministic; copy-on-extend semantics (each
/// successor owns an independent map) keep frontier entries non-aliased.
pub type Assignment<P> =
    BTreeMap<<P as CspProblemV1>::Var, <P as CspProblemV1>::Value>;

/// The contract a fixed-variable CSP must implement.
pub trait CspProblemV1 {
    /// Variable identifier.
    type Var: Ord + Clone;
    /// Assignable value.
    type Value: Clone;

    /// All variables, in assignment order. The order is fixed for the life
    /// of the problem; successors always extend by the first unassigned
    /// variable of this list.
    fn variables(&self) -> &[Self::Var];

    /// Candidate values for one variable.
    fn candidate_values(&self, var: &Self::Var) -> &[Self::Value];

    /// Whether a partial assignment satisfies the constraints.
    fn admits(&self, partial: &Assignment<Self>) -> bool;

    /// Whether `candidate` is a strictly better full assignment than
    /// `incumbent`. Defaults to `false` (no objective: first solution kept).
    fn prefer(&self, candidate: &Assignment<Self>, incumbent: &Assignment<Self>) -> bool {
        let _ = (candidate, incumbent);
        false
    }
}

/// Adapter implementing the engine's space contract for any CSP problem.
#[derive(Debug)]
pub struct CspSpaceV1<P> {
    problem: P,
}

impl<P: CspProblemV1> CspSpaceV1<P> {
    /// Wrap a CSP problem as a search space.
    #[must_use]
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// The wrapped problem.
    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<P: CspProblemV1> SearchSpaceV1 for CspSpaceV1<P> {
    type Node = Assignment<P>;

    fn successors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let variables = self.problem.variables();
        if node.len() >= variables.len() {
            return Vec::new();
        }
        let next = &variables[node.len()];
        let mut children = Vec::new();
        for value in self.problem.candidate_values(next) {
            let mut child = node.clone();
            child.insert(next.clone(), value.clone());
            if self.problem.admits(&child) {
                children.push(child);
            }
        }
        children
    }

    fn is_goal(&self, node: &Self::Node) -> bool {
        node.len() == self.problem.variables().len()
    }

    fn improves(&self, candidate: &Self::Node, incumbent: &Self::Node) -> bool {
        self.problem.prefer(candidate, incumbent)
    }
}

/// Configure a search over a CSP problem, starting from the empty assignment.
#[must_use]
pub fn csp_search<P: CspProblemV1>(
    problem: P,
    order: ExploreOrder,
) -> TreeSearchV1<CspSpaceV1<P>> {
    TreeSearchV1::new(Assignment::<P>::new(), CspSpaceV1::new(problem), order)
}
