//! Search space contract trait and closure adapter.

use std::marker::PhantomData;

/// The callback surface a problem encoding supplies to the engine.
///
/// The engine treats `Node` as fully opaque: it stores nodes, hands them
/// back to these methods, and nothing else. `Clone` is the "independently
/// copyable" contract — the engine may retain many nodes in its frontier at
/// once, so two live nodes must never alias mutable state.
///
/// # Contract
///
/// - `successors` and `is_goal` must be pure functions of the node: same
///   node → same result, no external iteration state.
/// - `successors` must return an empty list for a node with no valid
///   extension. The engine additionally never calls it on a node that
///   passes `is_goal`, so goal handling inside `successors` is not
///   load-bearing.
/// - `improves` is a strict "better than": irreflexive, and transitive over
///   the goal nodes actually compared. The engine does not verify either
///   property.
pub trait SearchSpaceV1 {
    /// Opaque node representing one point in the search space.
    type Node: Clone;

    /// All successors of `node`, in generation order.
    fn successors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` is a solution.
    fn is_goal(&self, node: &Self::Node) -> bool;

    /// Whether `candidate` is a strictly better solution than `incumbent`.
    ///
    /// The default returns `false`, which encodes the omitted-comparator
    /// semantics: the first goal node found is kept and never replaced.
    fn improves(&self, candidate: &Self::Node, incumbent: &Self::Node) -> bool {
        let _ = (candidate, incumbent);
        false
    }
}

/// Adapter turning plain closures into a [`SearchSpaceV1`].
///
/// Mirrors the construction boundary `(successorFn, goalFn, comparatorFn?)`
/// for callers that do not want a named space type. Use
/// [`FnSpace::new`] for the keep-first-goal default or
/// [`FnSpace::with_better`] to supply a comparator.
pub struct FnSpace<N, S, G, B = fn(&N, &N) -> bool> {
    succ: S,
    goal: G,
    better: Option<B>,
    _node: PhantomData<fn() -> N>,
}

impl<N, S, G> FnSpace<N, S, G>
where
    N: Clone,
    S: Fn(&N) -> Vec<N>,
    G: Fn(&N) -> bool,
{
    /// Build a space from successor and goal closures, with no comparator.
    pub fn new(succ: S, goal: G) -> Self {
        Self {
            succ,
            goal,
            better: None,
            _node: PhantomData,
        }
    }
}

impl<N, S, G, B> FnSpace<N, S, G, B>
where
    N: Clone,
    S: Fn(&N) -> Vec<N>,
    G: Fn(&N) -> bool,
    B: Fn(&N, &N) -> bool,
{
    /// Build a space from successor, goal, and strict-comparator closures.
    pub fn with_better(succ: S, goal: G, better: B) -> Self {
        Self {
            succ,
            goal,
            better: Some(better),
            _node: PhantomData,
        }
    }
}

impl<N, S, G, B> SearchSpaceV1 for FnSpace<N, S, G, B>
where
    N: Clone,
    S: Fn(&N) -> Vec<N>,
    G: Fn(&N) -> bool,
    B: Fn(&N, &N) -> bool,
{
    type Node = N;

    fn successors(&self, node: &N) -> Vec<N> {
        (self.succ)(node)
    }

    fn is_goal(&self, node: &N) -> bool {
        (self.goal)(node)
    }

    fn improves(&self, candidate: &N, incumbent: &N) -> bool {
        self.better.as_ref().is_some_and(|b| b(candidate, incumbent))
    }
}
