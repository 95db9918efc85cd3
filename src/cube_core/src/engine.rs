//! The layer turns and whole-cube reorientations.
//!
//! Every layer turn is a set of four-cycles of facelets (one per position
//! along the layer) plus, when the layer sits on the surface of the cube, a
//! rotation of the face capping it. Each axis has a forward and a reverse
//! primitive; the reverse walks the same cycles the other way and undoes the
//! cap rotation, so the two are exact inverses.

use log::trace;

use crate::{Axis, Cube, Face, Move, MoveError, MoveSequence, Rotation, Turns};

/// A single facelet: `(face, row, col)`.
type Sticker = (Face, usize, usize);

/// Which way a layer primitive turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    /// X: right, Y: up, Z: up
    Forward,
    /// X: left, Y: down, Z: down
    Reverse,
}

impl Axis {
    /// The four facelets that cycle into each other at position `i` along
    /// `layer`. A forward turn moves each sticker's color to the previous
    /// entry: `ring[0]` takes the color of `ring[1]` and so on.
    fn ring(self, size: usize, layer: usize, i: usize) -> [Sticker; 4] {
        let last = size - 1;
        match self {
            Axis::X => [
                (Face::Front, layer, i),
                (Face::Left, layer, i),
                (Face::Back, layer, i),
                (Face::Right, layer, i),
            ],
            // The back face is seen from behind, so its rows run upside down
            // and its columns mirrored relative to the front.
            Axis::Y => [
                (Face::Front, i, last - layer),
                (Face::Bottom, i, last - layer),
                (Face::Back, last - i, layer),
                (Face::Top, i, last - layer),
            ],
            Axis::Z => [
                (Face::Right, i, layer),
                (Face::Bottom, layer, last - i),
                (Face::Left, last - i, last - layer),
                (Face::Top, last - layer, i),
            ],
        }
    }

    /// The faces capping layer 0 and layer N-1, with the rotation each gets
    /// on a forward turn.
    fn caps(self) -> [(Face, Rotation); 2] {
        match self {
            Axis::X => [
                (Face::Top, Rotation::CounterClockwise),
                (Face::Bottom, Rotation::Clockwise),
            ],
            Axis::Y => [
                (Face::Right, Rotation::Clockwise),
                (Face::Left, Rotation::CounterClockwise),
            ],
            Axis::Z => [
                (Face::Front, Rotation::CounterClockwise),
                (Face::Back, Rotation::Clockwise),
            ],
        }
    }
}

impl Cube {
    /// Apply one move.
    ///
    /// # Errors
    ///
    /// If the move's layer is not below the cube size. The cube is left
    /// untouched in that case.
    pub fn apply_move(&mut self, move_: Move) -> Result<(), MoveError> {
        self.dispatch(move_.check_layer(self.size())?);
        Ok(())
    }

    /// Apply a move given as raw `(axis, layer, turns)` values.
    ///
    /// # Errors
    ///
    /// If `turns` is not 1, 2, or 3, or the layer is out of range.
    pub fn turn(&mut self, axis: Axis, layer: usize, turns: u8) -> Result<(), MoveError> {
        self.apply_move(Move::new(axis, layer, Turns::try_from(turns)?))
    }

    /// Apply every move of `sequence` in order.
    ///
    /// # Errors
    ///
    /// If some move is out of range. Moves before it have been applied, that
    /// one and everything after it has not.
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) -> Result<(), MoveError> {
        sequence
            .iter()
            .try_for_each(|&move_| self.apply_move(move_))
    }

    /// Apply an already range-checked move.
    pub(crate) fn dispatch(&mut self, move_: Move) {
        debug_assert!(move_.layer < self.size());
        trace!(target: "dispatch", "Applying {move_}");

        let Move { axis, layer, turns } = move_;
        match turns {
            Turns::One => self.turn_layer(axis, layer, Direction::Forward),
            Turns::Two => {
                self.turn_layer(axis, layer, Direction::Forward);
                self.turn_layer(axis, layer, Direction::Forward);
            }
            Turns::Three => self.turn_layer(axis, layer, Direction::Reverse),
        }
    }

    /// One quarter-turn of a single layer.
    pub(crate) fn turn_layer(&mut self, axis: Axis, layer: usize, direction: Direction) {
        let size = self.size();

        for i in 0..size {
            let ring = axis.ring(size, layer, i);
            let mut colors = ring.map(|(face, row, col)| self[face][(row, col)]);
            match direction {
                Direction::Forward => colors.rotate_left(1),
                Direction::Reverse => colors.rotate_right(1),
            }
            for ((face, row, col), color) in ring.into_iter().zip(colors) {
                self.face_mut(face)[(row, col)] = color;
            }
        }

        let [near, far] = axis.caps();
        let cap = if layer == 0 {
            Some(near)
        } else if layer == size - 1 {
            Some(far)
        } else {
            None
        };

        if let Some((face, rotation)) = cap {
            let rotation = match direction {
                Direction::Forward => rotation,
                Direction::Reverse => rotation.inverse(),
            };
            self.face_mut(face).rotate(rotation);
        }
    }

    /// Turn the whole cube so the old right face becomes the front.
    pub fn reorient_left(&mut self) {
        self.cycle_faces([Face::Front, Face::Right, Face::Back, Face::Left]);
        self.face_mut(Face::Bottom).rotate(Rotation::CounterClockwise);
        self.face_mut(Face::Top).rotate(Rotation::Clockwise);
    }

    /// Turn the whole cube so the old left face becomes the front.
    pub fn reorient_right(&mut self) {
        self.cycle_faces([Face::Front, Face::Left, Face::Back, Face::Right]);
        self.face_mut(Face::Bottom).rotate(Rotation::Clockwise);
        self.face_mut(Face::Top).rotate(Rotation::CounterClockwise);
    }

    /// Tilt the whole cube so the old bottom face becomes the front.
    pub fn reorient_up(&mut self) {
        self.cycle_faces([Face::Front, Face::Bottom, Face::Back, Face::Top]);
        self.face_mut(Face::Bottom).rotate(Rotation::Half);
        self.face_mut(Face::Back).rotate(Rotation::Half);
        self.face_mut(Face::Left).rotate(Rotation::CounterClockwise);
        self.face_mut(Face::Right).rotate(Rotation::Clockwise);
    }

    /// Tilt the whole cube so the old top face becomes the front. Exactly
    /// undoes [`Cube::reorient_up`].
    pub fn reorient_down(&mut self) {
        self.cycle_faces([Face::Front, Face::Top, Face::Back, Face::Bottom]);
        self.face_mut(Face::Top).rotate(Rotation::Half);
        self.face_mut(Face::Back).rotate(Rotation::Half);
        self.face_mut(Face::Left).rotate(Rotation::Clockwise);
        self.face_mut(Face::Right).rotate(Rotation::CounterClockwise);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_touch_distinct_stickers() {
        for size in 2..=5 {
            for axis in Axis::ALL {
                for layer in 0..size {
                    let mut seen = std::collections::HashSet::new();
                    for i in 0..size {
                        for sticker in axis.ring(size, layer, i) {
                            assert!(seen.insert(sticker), "{axis:?} {layer} {sticker:?}");
                        }
                    }
                    assert_eq!(seen.len(), 4 * size);
                }
            }
        }
    }

    #[test]
    fn a_layer_turn_moves_exactly_one_ring_off_the_caps() {
        let size = 4;
        for axis in Axis::ALL {
            for layer in 1..size - 1 {
                let before = scrambled(size);
                let mut after = before.clone();
                after.turn_layer(axis, layer, Direction::Forward);

                let ring: Vec<Sticker> = (0..size)
                    .flat_map(|i| axis.ring(size, layer, i))
                    .collect();
                for face in Face::ALL {
                    for row in 0..size {
                        for col in 0..size {
                            if !ring.contains(&(face, row, col)) {
                                assert_eq!(before[face][(row, col)], after[face][(row, col)]);
                            }
                        }
                    }
                }
            }
        }
    }

    fn scrambled(size: usize) -> Cube {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut cube = Cube::new_solved(size);
        for _ in 0..50 {
            cube.dispatch(Move::random(&mut rng, size));
        }
        cube
    }
}
