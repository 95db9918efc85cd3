use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MIN_SIZE;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Scramble bounds are reversed: min_moves {min} is greater than max_moves {max}")]
    ReversedBounds { min: usize, max: usize },
    #[error("A scramble must make at least one move")]
    EmptyScramble,
}

/// How many moves a scramble makes. The count is drawn uniformly from
/// `min_moves..=max_moves`.
///
/// Always holds valid bounds: it is built through [`ScrambleConfig::new`] or
/// deserialized through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScrambleBounds")]
pub struct ScrambleConfig {
    min_moves: usize,
    max_moves: usize,
}

/// The unchecked shape of `[scramble]` in a config file.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScrambleBounds {
    min_moves: usize,
    max_moves: usize,
}

impl Default for ScrambleBounds {
    fn default() -> Self {
        let ScrambleConfig {
            min_moves,
            max_moves,
        } = ScrambleConfig::default();
        Self {
            min_moves,
            max_moves,
        }
    }
}

impl TryFrom<ScrambleBounds> for ScrambleConfig {
    type Error = ConfigError;

    fn try_from(bounds: ScrambleBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min_moves, bounds.max_moves)
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            min_moves: 100,
            max_moves: 400,
        }
    }
}

impl ScrambleConfig {
    /// # Errors
    ///
    /// If `min_moves > max_moves` or `max_moves == 0`.
    pub fn new(min_moves: usize, max_moves: usize) -> Result<Self, ConfigError> {
        if min_moves > max_moves {
            return Err(ConfigError::ReversedBounds {
                min: min_moves,
                max: max_moves,
            });
        }
        if max_moves == 0 {
            return Err(ConfigError::EmptyScramble);
        }
        Ok(Self {
            min_moves,
            max_moves,
        })
    }

    pub fn min_moves(&self) -> usize {
        self.min_moves
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.min_moves..=self.max_moves
    }
}

/// Settings for the command-line driver, usually read from a TOML file.
///
/// ```toml
/// size = 4
/// solve_budget = 500000
///
/// [scramble]
/// min_moves = 20
/// max_moves = 40
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub size: usize,
    pub scramble: ScrambleConfig,
    pub solve_budget: usize,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            scramble: ScrambleConfig::default(),
            solve_budget: 100_000,
        }
    }
}

impl CubeConfig {
    /// Clamp the size up to the smallest supported cube.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.size = self.size.max(MIN_SIZE);
        self
    }
}
