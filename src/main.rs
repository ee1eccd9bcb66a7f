use rand::rngs::SmallRng;
use rand::SeedableRng;

use npuzzle::{shuffled, solve, Board};

// Scramble a 3x3 puzzle, then let the engine find a move-minimal path back
// to the goal. The seed is fixed so repeated runs show the same board.
const COLUMNS: usize = 3;
const DEMO_SEED: u64 = 2520;

fn main() {
    let goal = Board::goal(COLUMNS);
    let mut rng = SmallRng::seed_from_u64(DEMO_SEED);

    let start = match shuffled(&goal, &mut rng) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("shuffle failed: {}", err);
            return;
        }
    };

    let board = match Board::try_from_pair(&start, COLUMNS) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("shuffle produced an invalid state: {}", err);
            return;
        }
    };

    println!("----");
    println!("Scrambled:");
    println!("{}", board);
    println!("----");
    println!("Goal:");
    println!("{}", goal);
    println!("----");

    match solve(&start, &goal) {
        Ok(solution) => {
            println!("Found a solution in {} moves.", solution.move_count());
            println!(
                "Expanded {} board positions (generated {} total).",
                solution.expanded(),
                solution.generated()
            );
        }
        Err(err) => println!("No solution found: {}", err),
    }
}
