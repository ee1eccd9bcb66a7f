//! Puzzle-solving and state-management engine for a sliding-tile (N-puzzle)
//! game.
//!
//! Given a scrambled arrangement of numbered tiles plus one blank cell on a
//! square grid, the engine decides whether a fling gesture is a legal slide,
//! generates scrambled-but-solvable starting arrangements, tests an
//! arrangement against the goal, and computes a move-minimal path to the
//! goal with A* under the Manhattan-distance heuristic. Rendering, gesture
//! detection, persistence, and animation timing belong to the host.
//!
//! ## Modules
//! - `board`: the board representation (`Board`), the boundary state bundle
//!   (`StatePair`), and slide geometry.
//! - `movement`: the fling-legality predicate (`can_move`).
//! - `solvability`: the permutation-parity reachability test.
//! - `shuffle`: the solvable-scramble generator.
//! - `solver`: the A* search producing a `Solution`.
//! - `session`: the per-round game context (`GameSession`) and solution
//!   playback cursor.
//! - `error`: the failure taxonomy.

pub mod board;
pub mod error;
pub mod movement;
pub mod session;
pub mod shuffle;
pub mod solvability;
pub mod solver;

pub use board::{Board, Direction, StatePair};
pub use error::{BoardError, MoveError, ShuffleError, SolveError};
pub use movement::can_move;
pub use session::{FlingOutcome, GameSession, Records, SolutionPlayback, SolveStatus};
pub use shuffle::shuffled;
pub use solvability::is_solvable;
pub use solver::{solve, Solution};
