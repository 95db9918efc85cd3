use std::fmt::{Formatter, Result};

use cube_core::{Color, FaceletStyle};
use owo_colors::OwoColorize;

/// Draws each initial in its own terminal color.
pub struct Colored;

impl FaceletStyle for Colored {
    fn write_facelet(&self, f: &mut Formatter<'_>, color: Color) -> Result {
        let initial = color.initial();
        match color {
            Color::Red => write!(f, "{}", initial.red()),
            Color::Orange => write!(f, "{}", initial.truecolor(255, 140, 0)),
            Color::Blue => write!(f, "{}", initial.blue()),
            Color::Green => write!(f, "{}", initial.green()),
            Color::Yellow => write!(f, "{}", initial.yellow()),
            Color::White => write!(f, "{}", initial.white()),
        }
    }
}
