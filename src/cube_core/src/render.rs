//! Text rendering of a cube as an unfolded net.
//!
//! ```text
//!         _________
//!         |_Y_|_Y_|
//! ________|_Y_|_Y_|________________
//! |_B_|_B_|_R_|_R_|_G_|_G_|_O_|_O_|
//! |_B_|_B_|_R_|_R_|_G_|_G_|_O_|_O_|
//!         |_W_|_W_|
//!         |_W_|_W_|
//! ```
//!
//! The top face sits above the front, the middle band is left, front, right,
//! back, and the bottom face sits below the front.

use std::fmt::{Display, Formatter, Result};

use crate::{Color, Cube, Face};

/// How a single facelet is drawn inside its `|_?_` cell.
pub trait FaceletStyle {
    /// # Errors
    ///
    /// If writing to the formatter fails.
    fn write_facelet(&self, f: &mut Formatter<'_>, color: Color) -> Result;
}

/// Draws the color's initial.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl FaceletStyle for Plain {
    fn write_facelet(&self, f: &mut Formatter<'_>, color: Color) -> Result {
        write!(f, "{}", color.initial())
    }
}

/// A displayable net of a cube.
pub struct Net<'a, S = Plain> {
    cube: &'a Cube,
    style: S,
}

impl Cube {
    pub fn net(&self) -> Net<'_> {
        Net {
            cube: self,
            style: Plain,
        }
    }

    pub fn net_with<S: FaceletStyle>(&self, style: S) -> Net<'_, S> {
        Net { cube: self, style }
    }
}

impl<S: FaceletStyle> Net<'_, S> {
    fn write_row(&self, f: &mut Formatter<'_>, face: Face, row: usize) -> Result {
        for &color in self.cube[face].row(row) {
            f.write_str("|_")?;
            self.style.write_facelet(f, color)?;
            f.write_str("_")?;
        }
        Ok(())
    }
}

fn repeat(f: &mut Formatter<'_>, c: char, n: usize) -> Result {
    (0..n).try_for_each(|_| write!(f, "{c}"))
}

impl<S: FaceletStyle> Display for Net<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let size = self.cube.size();
        let indent = size * 4;

        repeat(f, ' ', indent)?;
        repeat(f, '_', indent + 1)?;
        for row in 0..size - 1 {
            writeln!(f)?;
            repeat(f, ' ', indent)?;
            self.write_row(f, Face::Top, row)?;
            f.write_str("|")?;
        }
        writeln!(f)?;
        repeat(f, '_', indent)?;
        self.write_row(f, Face::Top, size - 1)?;
        f.write_str("|")?;
        repeat(f, '_', indent * 2)?;

        for row in 0..size {
            writeln!(f)?;
            for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
                self.write_row(f, face, row)?;
            }
            f.write_str("|")?;
        }

        for row in 0..size {
            writeln!(f)?;
            repeat(f, ' ', indent)?;
            self.write_row(f, Face::Bottom, row)?;
            f.write_str("|")?;
        }
        writeln!(f)
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.net().fmt(f)
    }
}
