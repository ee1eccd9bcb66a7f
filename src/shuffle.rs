//! Scrambled-start generation: a random arrangement that is guaranteed
//! solvable and guaranteed different from the goal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, StatePair};
use crate::error::ShuffleError;
use crate::solvability::is_solvable;

/// Rejection-sampling budget. Half of all permutations are solvable and the
/// goal itself is a single point among them, so on average two attempts
/// suffice; the cap only trips on a broken random source.
const MAX_ATTEMPTS: usize = 1000;

/// Samples a uniformly random arrangement that is solvable and not the goal.
pub fn shuffled(goal: &Board, rng: &mut impl Rng) -> Result<StatePair, ShuffleError> {
    shuffled_board(goal, rng).map(StatePair::from)
}

pub(crate) fn shuffled_board(goal: &Board, rng: &mut impl Rng) -> Result<Board, ShuffleError> {
    let mut cells = goal.cells().to_vec();

    for _ in 0..MAX_ATTEMPTS {
        cells.shuffle(rng);

        let mut blank = 0;
        for (index, &label) in cells.iter().enumerate() {
            if label == goal.blank_label() {
                blank = index;
                break;
            }
        }

        let candidate = Board::from_parts(goal.columns(), cells.clone(), blank);
        if !candidate.is_goal(goal) && is_solvable(&candidate, goal) {
            return Ok(candidate);
        }
    }

    Err(ShuffleError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}
