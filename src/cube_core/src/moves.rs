//! Move values and their text notation.
//!
//! A move is written as the axis letter, the bracketed layer index, and an
//! optional suffix: `X[0]` is one quarter-turn, `X[0]2` a half-turn, and
//! `X[0]'` a quarter-turn the other way.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use fastrand::Rng;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The axis a layer turns about.
///
/// - X: horizontal slabs, layer 0 is the top row
/// - Y: vertical slabs, layer 0 is the rightmost column
/// - Z: slabs parallel to the front, layer 0 is the front
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Quarter-turns in the forward sense. `Three` is performed as a single turn
/// of the reverse primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turns {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Turns {
    pub const ALL: [Self; 3] = [Turns::One, Turns::Two, Turns::Three];

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turns::One => Turns::Three,
            Turns::Two => Turns::Two,
            Turns::Three => Turns::One,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("Layer {layer} is out of range for a cube of size {size}")]
    LayerOutOfRange { layer: usize, size: usize },
    #[error("Quarter-turn count must be 1, 2, or 3, got {0}")]
    InvalidTurns(u8),
    #[error("Unknown axis `{0}`, expected X, Y, or Z")]
    UnknownAxis(String),
    #[error("Could not parse move `{0}`, expected something like `X[0]`, `Y[1]'`, or `Z[2]2`")]
    Malformed(String),
}

impl TryFrom<u8> for Turns {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Turns::One),
            2 => Ok(Turns::Two),
            3 => Ok(Turns::Three),
            _ => Err(MoveError::InvalidTurns(value)),
        }
    }
}

impl FromStr for Axis {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            _ => Err(MoveError::UnknownAxis(s.to_owned())),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turns::One => write!(f, ""),
            Turns::Two => write!(f, "2"),
            Turns::Three => write!(f, "'"),
        }
    }
}

/// One layer turn. The layer index is only checked against a cube size when
/// the move is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub axis: Axis,
    pub layer: usize,
    pub turns: Turns,
}

impl Move {
    pub fn new(axis: Axis, layer: usize, turns: Turns) -> Self {
        Self { axis, layer, turns }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            turns: self.turns.inverse(),
            ..self
        }
    }

    /// A move with axis, layer, and turn count each drawn uniformly.
    pub fn random(rng: &mut Rng, size: usize) -> Self {
        Self {
            axis: Axis::ALL[rng.usize(..Axis::ALL.len())],
            layer: rng.usize(..size),
            turns: Turns::ALL[rng.usize(..Turns::ALL.len())],
        }
    }

    /// # Errors
    ///
    /// If the layer index does not name a layer of a cube of `size`.
    pub fn check_layer(self, size: usize) -> Result<Self, MoveError> {
        if self.layer < size {
            Ok(self)
        } else {
            Err(MoveError::LayerOutOfRange {
                layer: self.layer,
                size,
            })
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]{}", self.axis, self.layer, self.turns)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MoveError::Malformed(s.to_owned());

        let s = s.trim();
        let (axis, rest) = s.split_at_checked(1).ok_or_else(malformed)?;
        let axis = axis.parse::<Axis>()?;
        let rest = rest.strip_prefix('[').ok_or_else(malformed)?;
        let (layer, suffix) = rest.split_once(']').ok_or_else(malformed)?;
        let layer = layer.trim().parse::<usize>().map_err(|_| malformed())?;
        let turns = match suffix {
            "" => Turns::One,
            "2" => Turns::Two,
            "'" => Turns::Three,
            _ => return Err(malformed()),
        };

        Ok(Self { axis, layer, turns })
    }
}

/// A sequence of moves, used for scrambles and for command-line input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().copied().map(Move::inverse).collect())
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_notation() {
        assert_eq!(
            "X[0]".parse(),
            Ok(Move::new(Axis::X, 0, Turns::One))
        );
        assert_eq!(
            "y[12]'".parse(),
            Ok(Move::new(Axis::Y, 12, Turns::Three))
        );
        assert_eq!(
            "Z[3]2".parse(),
            Ok(Move::new(Axis::Z, 3, Turns::Two))
        );
    }

    #[test]
    fn rejects_bad_notation() {
        assert_eq!(
            "W[0]".parse::<Move>(),
            Err(MoveError::UnknownAxis("W".to_owned()))
        );
        for bad in ["", "X", "X0", "X[]", "X[0]3", "X[-1]", "X[0"] {
            assert!(bad.parse::<Move>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let sequence: MoveSequence = "X[0] Y[1]' Z[2]2".parse().unwrap();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.to_string(), "X[0] Y[1]' Z[2]2");
    }

    #[test]
    fn inverse_reverses_and_flips() {
        let sequence: MoveSequence = "X[0] Y[1]' Z[2]2".parse().unwrap();
        assert_eq!(sequence.inverse().to_string(), "Z[2]2 Y[1] X[0]'");
    }

    #[test]
    fn turns_from_raw() {
        assert_eq!(Turns::try_from(3), Ok(Turns::Three));
        assert_eq!(Turns::try_from(0), Err(MoveError::InvalidTurns(0)));
        assert_eq!(Turns::try_from(4), Err(MoveError::InvalidTurns(4)));
    }

    #[test]
    fn random_moves_stay_in_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            let m = Move::random(&mut rng, 4);
            assert!(m.check_layer(4).is_ok());
        }
    }
}
