//! A* search from an arbitrary solvable arrangement to the goal.
//!
//! The frontier, closed set, and path reconstruction come from the
//! `pathfinding` crate; this module supplies successor enumeration, the
//! Manhattan-distance heuristic, and the goal test. The heuristic is
//! admissible and consistent, so the returned path is move-minimal. Ties
//! between equal-cost frontier nodes are broken by the crate's heap order,
//! which prefers the node with the smaller remaining estimate; which one of
//! several equal-length optimal paths is returned is deterministic for a
//! given input.

use pathfinding::directed::astar::astar;
use smallvec::SmallVec;

use crate::board::{Board, StatePair};
use crate::error::SolveError;

/// A move-minimal path from start to goal, both inclusive, plus search
/// statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    states: Vec<StatePair>,
    expanded: usize,
    generated: usize,
}

impl Solution {
    /// The full state sequence. The first element is the start arrangement
    /// itself; a host stepping through the solution visually should skip it
    /// and advance one state at a time.
    pub fn states(&self) -> &[StatePair] {
        &self.states
    }

    pub fn move_count(&self) -> usize {
        self.states.len() - 1
    }

    /// Number of boards popped and expanded during the search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of successor boards constructed during the search.
    pub fn generated(&self) -> usize {
        self.generated
    }
}

/// Computes a move-minimal solution from `start` to `goal`.
///
/// An unsolvable start exhausts the search space and reports
/// [`SolveError::Unsolvable`]; callers that generate their boards through
/// [`crate::shuffle::shuffled`] never hit that case.
pub fn solve(start: &StatePair, goal: &Board) -> Result<Solution, SolveError> {
    let start = Board::try_from_pair(start, goal.columns())?;
    search(&start, goal)
}

fn search(start: &Board, goal: &Board) -> Result<Solution, SolveError> {
    assert!(start.columns() == goal.columns());

    let goal_cell = goal.label_positions();
    let mut expanded = 0;
    let mut generated = 0;

    let result = astar(
        start,
        |board| {
            let mut successors = SmallVec::<[(Board, u32); 4]>::new();
            for target in board.neighbor_positions(board.blank()) {
                if let Ok(next) = board.slide(target) {
                    successors.push((next, 1));
                }
            }

            expanded += 1;
            generated += successors.len();

            successors
        },
        |board| remaining_distance(board, &goal_cell),
        |board| board.is_goal(goal),
    );

    match result {
        Some((boards, _cost)) => Ok(Solution {
            states: boards.into_iter().map(StatePair::from).collect(),
            expanded,
            generated,
        }),
        None => Err(SolveError::Unsolvable),
    }
}

// at least one move remains for every cell of displacement
fn remaining_distance(board: &Board, goal_cell: &[usize]) -> u32 {
    let columns = board.columns();
    let mut total = 0;

    for (index, &label) in board.cells().iter().enumerate() {
        if label == board.blank_label() {
            continue;
        }

        let target = goal_cell[label as usize];
        let rows = (index / columns).abs_diff(target / columns);
        let cols = (index % columns).abs_diff(target % columns);
        total += (rows + cols) as u32;
    }

    total
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::error::BoardError;

    fn scrambled(columns: usize, steps: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(columns);
        for _ in 0..steps {
            let neighbors = board.neighbor_positions(board.blank());
            let target = neighbors[rng.gen_range(0..neighbors.len())];
            board = board.slide(target).unwrap();
        }
        board
    }

    #[test]
    fn already_solved_start_yields_single_state() {
        let goal = Board::goal(3);
        let solution = solve(&StatePair::from(&goal), &goal).unwrap();
        assert_eq!(solution.states().len(), 1);
        assert_eq!(solution.move_count(), 0);
    }

    #[test]
    fn one_move_from_goal_yields_two_states() {
        let goal = Board::goal(3);
        let start = goal.slide(5).unwrap();

        let solution = solve(&StatePair::from(&start), &goal).unwrap();
        assert_eq!(solution.states().len(), 2);
        assert_eq!(solution.states()[0], StatePair::from(&start));
        assert_eq!(solution.states()[1], StatePair::from(&goal));
    }

    #[test]
    fn path_starts_at_start_ends_at_goal_and_slides_once_per_step() {
        let goal = Board::goal(3);
        let start = scrambled(3, 60, 42);

        let solution = solve(&StatePair::from(&start), &goal).unwrap();
        let states = solution.states();
        assert_eq!(states[0], StatePair::from(&start));
        assert_eq!(states[states.len() - 1], StatePair::from(&goal));
        // no 3x3 arrangement is farther than 31 moves from the goal
        assert!(solution.move_count() <= 31);

        for step in states.windows(2) {
            let (before, after) = (&step[0], &step[1]);

            let differing: Vec<usize> = (0..before.cells.len())
                .filter(|&index| before.cells[index] != after.cells[index])
                .collect();
            assert_eq!(differing, {
                let mut swapped = vec![before.blank, after.blank];
                swapped.sort_unstable();
                swapped
            });

            let distance = (before.blank / 3).abs_diff(after.blank / 3)
                + (before.blank % 3).abs_diff(after.blank % 3);
            assert_eq!(distance, 1);
        }
    }

    #[test]
    fn path_length_is_minimal_for_known_instance() {
        // three tiles each one cell from home, so three moves is a lower bound
        let goal = Board::goal(3);
        let start = goal
            .slide(7)
            .unwrap()
            .slide(6)
            .unwrap()
            .slide(3)
            .unwrap();

        let solution = solve(&StatePair::from(&start), &goal).unwrap();
        assert_eq!(solution.move_count(), 3);
    }

    #[test]
    fn unsolvable_start_is_reported() {
        let goal = Board::goal(3);
        let mut cells: Vec<u8> = (0..9).collect();
        cells.swap(0, 1);
        let start = StatePair { cells, blank: 8 };

        assert!(matches!(solve(&start, &goal), Err(SolveError::Unsolvable)));
    }

    #[test]
    fn malformed_start_is_reported() {
        let goal = Board::goal(3);
        let start = StatePair {
            cells: vec![0, 1, 2],
            blank: 2,
        };

        assert!(matches!(
            solve(&start, &goal),
            Err(SolveError::InvalidStart(BoardError::WrongCellCount { .. }))
        ));
    }

    #[test]
    fn search_statistics_are_populated() {
        let goal = Board::goal(3);
        let start = goal.slide(5).unwrap().slide(4).unwrap();

        let solution = solve(&StatePair::from(&start), &goal).unwrap();
        // every non-goal node on the path is expanded, and each expansion
        // generates at least two successors
        assert!(solution.expanded() >= solution.move_count());
        assert!(solution.generated() >= solution.expanded());
    }
}
