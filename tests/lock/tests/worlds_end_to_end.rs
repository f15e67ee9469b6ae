//! End-to-end locks: each world encodes, drives, and decodes correctly.

use cairn_harness::runner::{drive, run_to_exhaustion, DriveBudgetV1};
use cairn_harness::worlds::connect_four::{encode_connect_four, BoardV1, GameStateV1};
use cairn_harness::worlds::jobshop::{encode_jobshop, makespan, JobShopInstanceV1};
use cairn_harness::worlds::sudoku::{encode_sudoku, SudokuGridV1, EMPTY_CELL};
use cairn_harness::worlds::tour::{encode_tour, path_distance, DistanceMatrixV1};

/// A complete, valid sudoku grid built from shifted rows.
fn full_sudoku() -> SudokuGridV1 {
    let mut cells = [[0u8; 9]; 9];
    for (row, values) in cells.iter_mut().enumerate() {
        for (col, cell) in values.iter_mut().enumerate() {
            *cell = u8::try_from((row * 3 + row / 3 + col) % 9).unwrap() + 1;
        }
    }
    SudokuGridV1(cells)
}

#[test]
fn prefilled_sudoku_decodes_to_its_input() {
    let grid = full_sudoku();
    let mut encoded = encode_sudoku(grid);
    assert!(
        encoded.search.step(),
        "zero empty cells make the initial node an immediate goal"
    );
    assert!(encoded.search.is_exhausted());
    assert_eq!(encoded.best_answer(), grid);
}

#[test]
fn sudoku_with_blanks_is_completed() {
    let full = full_sudoku();
    let mut grid = full;
    for &(row, col) in &[(0usize, 2usize), (3, 7), (6, 1), (8, 4)] {
        grid.0[row][col] = EMPTY_CELL;
    }
    let mut encoded = encode_sudoku(grid);
    let _ = run_to_exhaustion(&mut encoded.search);
    assert_eq!(encoded.best_answer(), full);
}

#[test]
fn single_machine_jobshop_makespan_is_forced() {
    let instance = JobShopInstanceV1 {
        machines: 1,
        durations: vec![3, 2, 5],
    };
    let mut encoded = encode_jobshop(instance.clone());
    let _ = run_to_exhaustion(&mut encoded.search);

    let best = encoded.search.best().expect("all-zeros is always reachable");
    assert_eq!(
        makespan(&instance, best),
        10,
        "one machine runs every job, whatever the assignment"
    );
    assert_eq!(encoded.best_answer(), vec![0, 0, 0]);
}

#[test]
fn tour_prefers_the_cheap_detour() {
    let distances = DistanceMatrixV1::from_rows(vec![
        vec![0, 1, 5],
        vec![1, 0, 1],
        vec![5, 1, 0],
    ])
    .unwrap();
    let mut encoded = encode_tour(distances.clone(), 0, 2);
    let _ = run_to_exhaustion(&mut encoded.search);

    assert_eq!(encoded.best_answer(), vec![0, 1, 2]);
    assert_eq!(path_distance(&distances, &encoded.best_answer()), 2);
}

#[test]
fn connect_four_against_column_zero_opponent_terminates() {
    // Red stacks the leftmost open column every turn. Small board keeps the
    // exhaustive drive bounded.
    let opponent = |state: &BoardV1| state.legal_moves()[0];
    let mut encoded = encode_connect_four(&BoardV1::new(3, 3, 3), opponent);
    let outcome = drive(&mut encoded.search, &DriveBudgetV1::default());

    assert!(encoded.search.is_exhausted(), "finite board, finite search");
    assert!(outcome.steps > 0);
    let answer = encoded.best_answer();
    if encoded.search.best().is_none() {
        assert!(answer.is_empty(), "no incumbent decodes to an empty move list");
    } else {
        assert!(!answer.is_empty());
    }
}

#[test]
fn anytime_incumbent_is_readable_before_exhaustion() {
    // Depth-first tour search: stop at the first goal and read the
    // incumbent early, then finish and watch it only improve.
    let distances = DistanceMatrixV1::from_rows(vec![
        vec![0, 1, 5],
        vec![1, 0, 1],
        vec![5, 1, 0],
    ])
    .unwrap();
    let mut encoded = encode_tour(distances.clone(), 0, 2);
    let early = drive(
        &mut encoded.search,
        &DriveBudgetV1 {
            max_steps: None,
            stop_at_first_goal: true,
        },
    );
    assert_eq!(early.improvements, 1);
    let early_cost = path_distance(&distances, &encoded.best_answer());

    let _ = run_to_exhaustion(&mut encoded.search);
    let final_cost = path_distance(&distances, &encoded.best_answer());
    assert!(final_cost <= early_cost);
    assert_eq!(final_cost, 2);
}
