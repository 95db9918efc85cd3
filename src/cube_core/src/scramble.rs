use fastrand::Rng;
use log::debug;

use crate::{Cube, Move, MoveSequence, ScrambleConfig};

/// Apply a random number of uniformly random moves to `cube` and return them.
///
/// The move count is drawn from `config`'s range; axis, layer, and turn count
/// of each move are drawn independently. Applying the returned sequence's
/// inverse restores the cube.
pub fn scramble(cube: &mut Cube, config: &ScrambleConfig, rng: &mut Rng) -> MoveSequence {
    let move_count = rng.usize(config.range());
    debug!(
        target: "scramble",
        "Scrambling: size={} move_count={move_count}",
        cube.size()
    );

    let sequence: MoveSequence = (0..move_count)
        .map(|_| Move::random(rng, cube.size()))
        .collect();

    for &move_ in sequence.iter() {
        cube.dispatch(move_);
    }

    sequence
}
