//! Game-session context: the mutable round state a host passes into the
//! engine instead of keeping ambient globals of its own.
//!
//! The session owns the current arrangement, the move and elapsed-seconds
//! counters, the best-score records, and the frozen-grid flag that blocks
//! input while a solution is being played back. It never owns a clock, a
//! file, or a view; the host drives `tick` from its own timer and persists
//! the records however it likes.

use rand::Rng;

use crate::board::{Board, Direction, StatePair};
use crate::error::{BoardError, ShuffleError, SolveError};
use crate::movement::can_move;
use crate::shuffle::shuffled_board;
use crate::solver::{solve, Solution};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Solved by the player without beating any record.
    UserSolved,
    /// New record for the fewest moves.
    FewestMoves,
    /// New record for the fastest time.
    FastestTime,
    /// New record for both fewest moves and fastest time.
    FewestAndFastest,
    /// The player asked the engine to finish the round.
    ComputerSolved,
}

/// Best scores across rounds. `None` until a round has been won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    fewest_moves: Option<u64>,
    fastest_time: Option<u64>,
}

impl Records {
    pub fn fewest_moves(&self) -> Option<u64> {
        self.fewest_moves
    }

    pub fn fastest_time(&self) -> Option<u64> {
        self.fastest_time
    }

    /// Classifies a finished round against the stored records and updates
    /// whichever of them it beats.
    pub fn register(&mut self, moves: u64, seconds: u64) -> SolveStatus {
        let beat_moves = self.fewest_moves.map_or(true, |best| moves < best);
        let beat_time = self.fastest_time.map_or(true, |best| seconds < best);

        if beat_moves {
            self.fewest_moves = Some(moves);
        }
        if beat_time {
            self.fastest_time = Some(seconds);
        }

        match (beat_moves, beat_time) {
            (true, true) => SolveStatus::FewestAndFastest,
            (true, false) => SolveStatus::FewestMoves,
            (false, true) => SolveStatus::FastestTime,
            (false, false) => SolveStatus::UserSolved,
        }
    }
}

/// Result of handing a fling gesture to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlingOutcome {
    /// The grid was frozen or the gesture was illegal; nothing changed.
    Ignored,
    /// The tile slid into the blank.
    Moved,
    /// The slide completed the puzzle and ended the round.
    Solved(SolveStatus),
}

pub struct GameSession {
    goal: Board,
    board: Board,
    frozen: bool,
    in_session: bool,
    moves: u64,
    seconds: u64,
    records: Records,
}

impl GameSession {
    pub fn new(columns: usize) -> GameSession {
        let goal = Board::goal(columns);
        GameSession {
            board: goal.clone(),
            goal,
            frozen: false,
            in_session: false,
            moves: 0,
            seconds: 0,
            records: Records::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn is_in_session(&self) -> bool {
        self.in_session
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Installs a fresh solvable scramble, resets the counters, and starts
    /// a round.
    pub fn scramble(&mut self, rng: &mut impl Rng) -> Result<&Board, ShuffleError> {
        self.board = shuffled_board(&self.goal, rng)?;
        self.moves = 0;
        self.seconds = 0;
        self.in_session = true;
        self.frozen = false;
        Ok(&self.board)
    }

    /// Reinstates an arrangement the host got from the engine earlier, e.g.
    /// when resuming an interrupted round.
    pub fn restore(&mut self, state: &StatePair) -> Result<(), BoardError> {
        self.board = Board::try_from_pair(state, self.goal.columns())?;
        self.in_session = !self.board.is_goal(&self.goal);
        self.frozen = false;
        Ok(())
    }

    /// Applies a fling gesture to the current arrangement.
    ///
    /// Moves are only counted while a round is live; sliding tiles around
    /// after a win is allowed but scores nothing.
    pub fn fling(&mut self, direction: Direction, position: usize) -> FlingOutcome {
        if self.frozen
            || !can_move(direction, position, self.board.blank(), self.board.columns())
        {
            return FlingOutcome::Ignored;
        }

        match self.board.slide(position) {
            Ok(next) => self.board = next,
            Err(_) => return FlingOutcome::Ignored,
        }

        if self.in_session {
            self.moves += 1;
            if self.board.is_goal(&self.goal) {
                self.in_session = false;
                let status = self.records.register(self.moves, self.seconds);
                return FlingOutcome::Solved(status);
            }
        }

        FlingOutcome::Moved
    }

    /// Advances the elapsed-time counter by one second while a round is
    /// live. The host owns the actual timer.
    pub fn tick(&mut self) {
        if self.in_session {
            self.seconds += 1;
        }
    }

    /// Solves the current arrangement, freezes the grid for playback, and
    /// ends the round as [`SolveStatus::ComputerSolved`]. Records are left
    /// untouched.
    pub fn request_solution(&mut self) -> Result<SolutionPlayback, SolveError> {
        let solution = solve(&StatePair::from(&self.board), &self.goal)?;
        self.in_session = false;
        self.frozen = true;
        Ok(SolutionPlayback::new(solution))
    }

    /// Ends solution playback: the board lands on the goal and the grid
    /// unfreezes for the next round.
    pub fn finish_playback(&mut self) {
        self.board = self.goal.clone();
        self.frozen = false;
    }
}

/// Forward-ordered, read-only cursor over a solution's state sequence.
///
/// The first state is the arrangement already on screen, so the cursor
/// starts past it; each [`advance`](SolutionPlayback::advance) yields the
/// next arrangement to display until the goal has been shown.
pub struct SolutionPlayback {
    solution: Solution,
    cursor: usize,
}

impl SolutionPlayback {
    fn new(solution: Solution) -> SolutionPlayback {
        SolutionPlayback {
            solution,
            cursor: 0,
        }
    }

    pub fn states(&self) -> &[StatePair] {
        self.solution.states()
    }

    /// Number of moves the playback will display.
    pub fn move_count(&self) -> usize {
        self.solution.move_count()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.solution.states().len()
    }

    /// The next arrangement to display, or `None` once the goal has been
    /// yielded.
    pub fn advance(&mut self) -> Option<&StatePair> {
        if self.is_finished() {
            return None;
        }

        self.cursor += 1;
        Some(&self.solution.states()[self.cursor])
    }
}
