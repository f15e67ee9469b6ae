//! Reset and determinism locks.
//!
//! `reset()` restores the initial configuration, and a reset instance
//! reproduces a fresh instance's incumbent, counters, and report digest.

use cairn_harness::report::RunReportV1;
use cairn_harness::runner::run_to_exhaustion;
use cairn_harness::worlds::jobshop::{encode_jobshop, JobShopInstanceV1};
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;

use lock_tests::LabelTreeSpace;

fn label_tree_search(order: ExploreOrder) -> TreeSearchV1<LabelTreeSpace> {
    TreeSearchV1::new(
        Vec::new(),
        LabelTreeSpace {
            branching: 2,
            depth: 3,
        },
        order,
    )
}

#[test]
fn reset_restores_searching_state() {
    let mut search = label_tree_search(ExploreOrder::DepthFirst);
    for _ in 0..5 {
        let _ = search.step();
    }
    search.reset();
    assert!(!search.is_exhausted());
    assert!(search.best().is_none());
    assert_eq!(search.frontier_len(), 1);
    assert_eq!(search.stats().steps, 0);
}

#[test]
fn reset_mid_run_reproduces_a_fresh_run() {
    let mut fresh = label_tree_search(ExploreOrder::BreadthFirst);
    while !fresh.is_exhausted() {
        let _ = fresh.step();
    }

    let mut reused = label_tree_search(ExploreOrder::BreadthFirst);
    for _ in 0..7 {
        let _ = reused.step();
    }
    reused.reset();
    while !reused.is_exhausted() {
        let _ = reused.step();
    }

    assert_eq!(reused.best(), fresh.best());
    assert_eq!(reused.stats(), fresh.stats());
    assert_eq!(reused.frontier_high_water(), fresh.frontier_high_water());
}

#[test]
fn reset_after_exhaustion_allows_a_full_re_run() {
    let mut search = label_tree_search(ExploreOrder::DepthFirst);
    while !search.is_exhausted() {
        let _ = search.step();
    }
    let first_best = search.best().cloned();
    let first_stats = *search.stats();

    search.reset();
    while !search.is_exhausted() {
        let _ = search.step();
    }
    assert_eq!(search.best().cloned(), first_best);
    assert_eq!(*search.stats(), first_stats);
}

#[test]
fn world_re_runs_reproduce_the_report_digest() {
    let instance = JobShopInstanceV1 {
        machines: 2,
        durations: vec![3, 1, 2],
    };

    let mut encoded = encode_jobshop(instance.clone());
    let first_outcome = run_to_exhaustion(&mut encoded.search);
    let first_report =
        RunReportV1::from_search(encoded.world_id, &encoded.search, first_outcome.stop_reason);
    let first_best = encoded.search.best().cloned();

    encoded.search.reset();
    let second_outcome = run_to_exhaustion(&mut encoded.search);
    let second_report =
        RunReportV1::from_search(encoded.world_id, &encoded.search, second_outcome.stop_reason);

    assert_eq!(encoded.search.best().cloned(), first_best);
    assert_eq!(first_report, second_report);
    assert_eq!(
        first_report.digest().unwrap(),
        second_report.digest().unwrap(),
        "deterministic callbacks give byte-identical reports"
    );

    // A brand-new instance agrees too.
    let mut fresh = encode_jobshop(instance);
    let fresh_outcome = run_to_exhaustion(&mut fresh.search);
    let fresh_report =
        RunReportV1::from_search(fresh.world_id, &fresh.search, fresh_outcome.stop_reason);
    assert_eq!(fresh_report.digest().unwrap(), first_report.digest().unwrap());
}
