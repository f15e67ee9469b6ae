//! Incumbent replacement locks.
//!
//! Without a comparator the first goal found is final; with one, the
//! incumbent moves only to a strictly better goal and never regresses.

use cairn_search::contract::FnSpace;
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;

/// A one-level tree whose root fans out to the given leaf values, all of
/// which are goals.
fn fan_out(leaves: Vec<i64>) -> impl Fn(&i64) -> Vec<i64> {
    move |node: &i64| if *node == 0 { leaves.clone() } else { Vec::new() }
}

#[test]
fn without_comparator_first_goal_is_final() {
    let mut search = TreeSearchV1::new(
        0i64,
        FnSpace::new(fan_out(vec![7, 3, 9]), |n: &i64| *n != 0),
        ExploreOrder::BreadthFirst,
    );
    let mut incumbents = Vec::new();
    while !search.is_exhausted() {
        if search.step() {
            incumbents.push(*search.best().unwrap());
        }
    }
    assert_eq!(incumbents, vec![7], "only the first goal installs");
    assert_eq!(search.best(), Some(&7));
    assert_eq!(search.stats().goal_hits, 3);
    assert_eq!(search.stats().improvements, 1);
}

#[test]
fn with_comparator_incumbent_moves_only_strictly_better() {
    let mut search = TreeSearchV1::new(
        0i64,
        FnSpace::with_better(
            fan_out(vec![7, 3, 9, 3, 1]),
            |n: &i64| *n != 0,
            |a: &i64, b: &i64| a < b,
        ),
        ExploreOrder::BreadthFirst,
    );
    let mut incumbents = Vec::new();
    while !search.is_exhausted() {
        if search.step() {
            incumbents.push(*search.best().unwrap());
        }
    }
    // 7 installs, 3 improves, 9 does not, the second 3 is not *strictly*
    // better, 1 improves.
    assert_eq!(incumbents, vec![7, 3, 1]);
    assert_eq!(search.stats().goal_hits, 5);
    assert_eq!(search.stats().improvements, 3);
}

#[test]
fn incumbent_survives_exhaustion() {
    let mut search = TreeSearchV1::new(
        0i64,
        FnSpace::with_better(
            fan_out(vec![4, 2]),
            |n: &i64| *n != 0,
            |a: &i64, b: &i64| a < b,
        ),
        ExploreOrder::DepthFirst,
    );
    while !search.is_exhausted() {
        let _ = search.step();
    }
    let best = *search.best().unwrap();
    let _ = search.step();
    let _ = search.step();
    assert_eq!(search.best(), Some(&best), "post-exhaustion steps change nothing");
}
