use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The color of a single facelet. A solved cube shows each color on exactly
/// one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
    White,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown color `{0}`, expected a color name or its initial")]
pub struct ParseColorError(pub String);

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Orange, Blue, Green, Yellow, White];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }

    /// The first character of the color name, used when drawing the net.
    pub fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::White => 'W',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| {
                color.name().eq_ignore_ascii_case(trimmed)
                    || trimmed
                        .chars()
                        .exactly_one()
                        .is_ok_and(|c| c.eq_ignore_ascii_case(&color.initial()))
            })
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}
