//! Board representation: an ordered arrangement of tile labels over a square
//! grid plus the blank cell's position.
//!
//! A board over `columns` columns holds every label in `0..columns²` exactly
//! once; the highest label is the blank. Boards are immutable value
//! snapshots: a slide always produces a new board, so in-flight search
//! branches never alias a partially-applied arrangement.

use std::fmt::{Display, Write};

use smallvec::SmallVec;

use crate::error::{BoardError, MoveError};

/// Direction of a fling gesture as reported by the host, including the
/// degenerate case the gesture detector could not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Invalid,
}

/// The minimal state bundle crossing the engine boundary: the arrangement
/// and the blank's position within it. The host never manipulates a `Board`
/// directly, only this pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePair {
    pub cells: Vec<u8>,
    pub blank: usize,
}

impl StatePair {
    pub fn is_goal(&self, goal: &Board) -> bool {
        self.cells == goal.cells()
    }
}

impl From<Board> for StatePair {
    fn from(board: Board) -> StatePair {
        StatePair {
            blank: board.blank,
            cells: board.cells,
        }
    }
}

impl From<&Board> for StatePair {
    fn from(board: &Board) -> StatePair {
        StatePair {
            blank: board.blank,
            cells: board.cells.clone(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    columns: usize,
    cells: Vec<u8>,
    blank: usize,
}

impl Board {
    /// The identity arrangement: ascending labels with the blank in the
    /// bottom-right cell.
    pub fn goal(columns: usize) -> Board {
        assert!(
            (2..=15).contains(&columns),
            "column count must be in 2..=15"
        );

        let len = columns * columns;
        Board {
            columns,
            cells: (0..len).map(|label| label as u8).collect(),
            blank: len - 1,
        }
    }

    /// Rebuilds a board from a state bundle, validating that the cells form
    /// a permutation and that the blank index is consistent with them.
    pub fn try_from_pair(pair: &StatePair, columns: usize) -> Result<Board, BoardError> {
        let expected = columns * columns;
        if pair.cells.len() != expected {
            return Err(BoardError::WrongCellCount {
                columns,
                expected,
                actual: pair.cells.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &label in &pair.cells {
            if label as usize >= expected || seen[label as usize] {
                return Err(BoardError::NotAPermutation { label });
            }
            seen[label as usize] = true;
        }

        let blank_label = (expected - 1) as u8;
        if pair.blank >= expected || pair.cells[pair.blank] != blank_label {
            return Err(BoardError::BlankMismatch {
                blank: pair.blank,
                blank_label,
            });
        }

        Ok(Board {
            columns,
            cells: pair.cells.clone(),
            blank: pair.blank,
        })
    }

    pub(crate) fn from_parts(columns: usize, cells: Vec<u8>, blank: usize) -> Board {
        debug_assert_eq!(cells.len(), columns * columns);
        debug_assert_eq!(cells[blank] as usize, cells.len() - 1);

        Board {
            columns,
            cells,
            blank,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Index of the blank cell. Kept alongside `cells` for O(1) access;
    /// always satisfies `cells[blank] == blank_label`.
    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn blank_label(&self) -> u8 {
        (self.cells.len() - 1) as u8
    }

    /// The up-to-4 grid-adjacent cell indices of `position`, with
    /// out-of-bounds neighbors excluded at edges and corners.
    pub fn neighbor_positions(&self, position: usize) -> SmallVec<[usize; 4]> {
        let columns = self.columns;
        let mut neighbors = SmallVec::new();

        if position >= columns {
            neighbors.push(position - columns);
        }
        if position + columns < self.cells.len() {
            neighbors.push(position + columns);
        }
        if position % columns != 0 {
            neighbors.push(position - 1);
        }
        if position % columns != columns - 1 {
            neighbors.push(position + 1);
        }

        neighbors
    }

    /// Slides the tile at `target` into the blank, returning the resulting
    /// board. The public surface is expected to pre-validate the move via
    /// [`crate::movement::can_move`]; a non-blank-adjacent target is rejected
    /// here as well.
    pub fn slide(&self, target: usize) -> Result<Board, MoveError> {
        if !self.neighbor_positions(self.blank).contains(&target) {
            return Err(MoveError::NotAdjacent {
                target,
                blank: self.blank,
            });
        }

        let mut next = self.clone();
        next.cells.swap(self.blank, target);
        next.blank = target;
        Ok(next)
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self.cells == goal.cells
    }

    /// Lookup from label to the cell index currently holding it.
    pub fn label_positions(&self) -> Vec<usize> {
        let mut positions = vec![0; self.cells.len()];
        for (index, &label) in self.cells.iter().enumerate() {
            positions[label as usize] = index;
        }
        positions
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for row in self.cells.chunks(self.columns) {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for (column, &label) in row.iter().enumerate() {
                if column > 0 {
                    f.write_char(' ')?;
                }
                if label == self.blank_label() {
                    write!(f, "{:>2}", '.')?;
                } else {
                    // tiles are shown 1-based, as on a physical puzzle
                    write!(f, "{:>2}", label + 1)?;
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({}x{}, {:?})", self.columns, self.columns, self.cells)
    }
}
