//! Failure conditions reported by the engine.
//!
//! Boards are immutable value snapshots, so a failed operation leaves the
//! caller holding its last-known-good state.

use thiserror::Error;

/// A malformed state bundle crossed the engine boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} cells for a {columns}x{columns} board, got {actual}")]
    WrongCellCount {
        columns: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cells are not a permutation: label {label} is duplicated or out of range")]
    NotAPermutation { label: u8 },

    #[error("blank index {blank} does not hold the blank label {blank_label}")]
    BlankMismatch { blank: usize, blank_label: u8 },
}

/// A slide was requested into a cell that is not adjacent to the blank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {target} is not adjacent to the blank at {blank}")]
    NotAdjacent { target: usize, blank: usize },
}

/// The shuffle generator ran out of retries.
///
/// About half of all permutations are solvable, so the retry budget is only
/// exhausted if the random source is broken.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    #[error("no valid shuffle found after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
}

/// The solver could not produce a path to the goal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The search frontier emptied without reaching the goal. This signals a
    /// precondition violation upstream: an unsolvable board reached the
    /// solver.
    #[error("board cannot reach the goal arrangement")]
    Unsolvable,

    #[error(transparent)]
    InvalidStart(#[from] BoardError),
}
