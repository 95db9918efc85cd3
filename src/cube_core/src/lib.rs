#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! An N×N×N twisty cube modelled as six facelet grids.
//!
//! The cube is stored as six [`FaceGrid`]s keyed by [`Face`]. Layer turns and
//! whole-cube reorientations permute facelets between those grids without
//! ever creating or destroying a color.

pub mod color;
pub mod config;
pub mod cube;
mod engine;
pub mod grid;
pub mod moves;
pub mod render;
pub mod scramble;
pub mod solver;

pub use color::Color;
pub use config::{ConfigError, CubeConfig, ScrambleConfig};
pub use cube::{Cube, CubeError, Face};
pub use grid::{FaceGrid, GridError, Rotation};
pub use moves::{Axis, Move, MoveError, MoveSequence, Turns};
pub use render::{FaceletStyle, Net, Plain};
pub use scramble::scramble;
pub use solver::{SolveOutcome, solve_random};

/// The smallest cube this crate models. Smaller requested sizes are clamped up.
pub const MIN_SIZE: usize = 2;
