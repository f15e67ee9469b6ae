//! Sudoku as a fixed-variable CSP world.
//!
//! Variables are the empty cells of the input grid in row-major order.
//! Candidate values for a cell are derived once at encode time from the
//! values already used in its row, column, and box of the *initial* grid;
//! the constraints predicate re-checks the overlaid board so that two
//! assigned cells cannot clash with each other either.

use cairn_search::frontier::ExploreOrder;

use crate::contract::{DecoderV1, EncodedSearchV1};
use crate::csp::{csp_search, Assignment, CspProblemV1, CspSpaceV1};

/// Cells per side.
pub const GRID_SIDE: usize = 9;

/// Cells per box side.
pub const BOX_SIDE: usize = 3;

/// Reserved marker for an unfilled cell.
pub const EMPTY_CELL: u8 = 0;

/// A 9×9 grid of digits, `0` meaning empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SudokuGridV1(pub [[u8; GRID_SIDE]; GRID_SIDE]);

impl SudokuGridV1 {
    /// Coordinates of the empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, values) in self.0.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == EMPTY_CELL {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Whether `value` occurs more than once in the row, column, or box
    /// containing `(row, col)`.
    fn value_clashes(&self, row: usize, col: usize, value: u8) -> bool {
        let in_row = self.0[row].iter().filter(|&&v| v == value).count();
        if in_row > 1 {
            return true;
        }
        let in_col = self.0.iter().filter(|r| r[col] == value).count();
        if in_col > 1 {
            return true;
        }
        let (box_row, box_col) = (BOX_SIDE * (row / BOX_SIDE), BOX_SIDE * (col / BOX_SIDE));
        let in_box = (box_row..box_row + BOX_SIDE)
            .flat_map(|r| (box_col..box_col + BOX_SIDE).map(move |c| self.0[r][c]))
            .filter(|&v| v == value)
            .count();
        in_box > 1
    }

    /// Values of 1–9 not yet used in the row, column, or box of `(row, col)`.
    fn open_values(&self, row: usize, col: usize) -> Vec<u8> {
        let (box_row, box_col) = (BOX_SIDE * (row / BOX_SIDE), BOX_SIDE * (col / BOX_SIDE));
        (1..=9)
            .filter(|&value| {
                !self.0[row].contains(&value)
                    && !self.0.iter().any(|r| r[col] == value)
                    && !(box_row..box_row + BOX_SIDE).any(|r| {
                        (box_col..box_col + BOX_SIDE).any(|c| self.0[r][c] == value)
                    })
            })
            .collect()
    }
}

/// The CSP behind one sudoku instance.
#[derive(Debug)]
pub struct SudokuProblemV1 {
    base: SudokuGridV1,
    cells: Vec<(usize, usize)>,
    domains: Vec<Vec<u8>>,
}

impl SudokuProblemV1 {
    /// Derive variables and per-cell candidate values from `base`.
    #[must_use]
    pub fn new(base: SudokuGridV1) -> Self {
        let cells = base.empty_cells();
        let domains = cells
            .iter()
            .map(|&(row, col)| base.open_values(row, col))
            .collect();
        Self {
            base,
            cells,
            domains,
        }
    }

    fn overlay(&self, partial: &Assignment<Self>) -> SudokuGridV1 {
        let mut board = self.base;
        for (&(row, col), &value) in partial {
            board.0[row][col] = value;
        }
        board
    }
}

impl CspProblemV1 for SudokuProblemV1 {
    type Var = (usize, usize);
    type Value = u8;

    fn variables(&self) -> &[(usize, usize)] {
        &self.cells
    }

    fn candidate_values(&self, var: &(usize, usize)) -> &[u8] {
        let index = self
            .cells
            .iter()
            .position(|cell| cell == var)
            .expect("candidate_values called with a known variable");
        &self.domains[index]
    }

    fn admits(&self, partial: &Assignment<Self>) -> bool {
        let board = self.overlay(partial);
        partial
            .iter()
            .all(|(&(row, col), &value)| !board.value_clashes(row, col, value))
    }
}

/// Decoder overlaying the assignment on the initial grid.
///
/// `None` decodes to the initial grid unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SudokuDecoderV1 {
    base: SudokuGridV1,
}

impl DecoderV1 for SudokuDecoderV1 {
    type Node = Assignment<SudokuProblemV1>;
    type Answer = SudokuGridV1;

    fn decode(&self, node: Option<&Self::Node>) -> SudokuGridV1 {
        let mut board = self.base;
        if let Some(assignment) = node {
            for (&(row, col), &value) in assignment {
                board.0[row][col] = value;
            }
        }
        board
    }
}

/// Configure a depth-first search that fills the grid's empty cells.
///
/// A grid with zero empty cells is an immediate goal at the initial node.
#[must_use]
pub fn encode_sudoku(
    grid: SudokuGridV1,
) -> EncodedSearchV1<CspSpaceV1<SudokuProblemV1>, SudokuDecoderV1> {
    let search = csp_search(SudokuProblemV1::new(grid), ExploreOrder::DepthFirst);
    EncodedSearchV1 {
        world_id: "sudoku",
        search,
        decoder: SudokuDecoderV1 { base: grid },
    }
}
