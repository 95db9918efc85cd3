use fastrand::Rng;
use log::{debug, info};

use crate::{Cube, Move};

const PROGRESS_INTERVAL: usize = 100_000;

/// How a random walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    pub solved: bool,
    pub moves_used: usize,
}

/// Apply uniformly random moves until the cube is solved or `move_limit`
/// moves have been made.
///
/// This is a blind random walk. It is only likely to succeed on tiny cubes
/// that are a handful of moves from solved.
pub fn solve_random(cube: &mut Cube, move_limit: usize, rng: &mut Rng) -> SolveOutcome {
    let mut moves_used = 0;
    let mut solved = cube.is_solved();

    while !solved && moves_used < move_limit {
        cube.dispatch(Move::random(rng, cube.size()));
        moves_used += 1;
        solved = cube.is_solved();

        if moves_used % PROGRESS_INTERVAL == 0 {
            debug!(target: "solve_random", "Still searching: {moves_used}/{move_limit}");
        }
    }

    info!(
        target: "solve_random",
        "Random walk finished: solved={solved} moves_used={moves_used}"
    );

    SolveOutcome { solved, moves_used }
}
