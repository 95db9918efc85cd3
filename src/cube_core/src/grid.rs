//! Square facelet grids and the three face-local rotations used by the move
//! engine.

use std::ops::{Index, IndexMut};

use itertools::Itertools;
use thiserror::Error;

use crate::Color;

/// A quarter, half, or reverse-quarter rotation of a single grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Rotation {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
            Rotation::Half => Rotation::Half,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid is not square: row {row} has {actual} cells but the grid has {expected} rows")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// An N×N grid of colors stored row-major. Indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    size: usize,
    cells: Box<[Color]>,
}

impl FaceGrid {
    /// A grid with every cell set to `color`.
    pub fn uniform(size: usize, color: Color) -> Self {
        Self {
            size,
            cells: vec![color; size * size].into_boxed_slice(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// If any row's length differs from the number of rows.
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::Ragged {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let cells = (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| f(row, col))
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[Color] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Whether every cell holds the same color.
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all_equal()
    }

    /// `out[r][c] = self[N-1-c][r]`
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let n = self.size;
        Self::from_fn(n, |r, c| self[(n - 1 - c, r)])
    }

    /// `out[r][c] = self[c][N-1-r]`
    #[must_use]
    pub fn rotated_counter_clockwise(&self) -> Self {
        let n = self.size;
        Self::from_fn(n, |r, c| self[(c, n - 1 - r)])
    }

    /// `out[r][c] = self[N-1-r][N-1-c]`
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        let n = self.size;
        Self::from_fn(n, |r, c| self[(n - 1 - r, n - 1 - c)])
    }

    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => self.rotated_clockwise(),
            Rotation::CounterClockwise => self.rotated_counter_clockwise(),
            Rotation::Half => self.rotated_180(),
        }
    }

    pub(crate) fn rotate(&mut self, rotation: Rotation) {
        *self = self.rotated(rotation);
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.row(row)[col]
    }
}

impl IndexMut<(usize, usize)> for FaceGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let size = self.size;
        &mut self.cells[row * size..(row + 1) * size][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn sample() -> FaceGrid {
        FaceGrid::from_rows(&[
            [Red, Orange, Blue],
            [Green, Yellow, White],
            [White, Red, Blue],
        ])
        .unwrap()
    }

    #[test]
    fn clockwise_moves_left_column_to_top_row() {
        let turned = sample().rotated_clockwise();
        assert_eq!(turned.row(0), &[White, Green, Red]);
        assert_eq!(turned.row(2), &[Blue, White, Blue]);
    }

    #[test]
    fn counter_clockwise_moves_right_column_to_top_row() {
        let turned = sample().rotated_counter_clockwise();
        assert_eq!(turned.row(0), &[Blue, White, Blue]);
        assert_eq!(turned.row(2), &[Red, Green, White]);
    }

    #[test]
    fn half_turn_reverses_cells() {
        let grid = sample();
        let turned = grid.rotated_180();
        let mut reversed = grid.cells().to_vec();
        reversed.reverse();
        assert_eq!(turned.cells(), reversed.as_slice());
    }

    #[test]
    fn rotations_undo_each_other() {
        let grid = sample();
        assert_eq!(grid.rotated_180().rotated_180(), grid);
        assert_eq!(grid.rotated_clockwise().rotated_counter_clockwise(), grid);
        assert_eq!(grid.rotated_counter_clockwise().rotated_clockwise(), grid);
        assert_eq!(
            grid.rotated_clockwise().rotated_clockwise(),
            grid.rotated_180()
        );
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise, Rotation::Half] {
            assert_eq!(grid.rotated(rotation).rotated(rotation.inverse()), grid);
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = FaceGrid::from_rows(&[vec![Red, Red], vec![Red]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn uniformity() {
        assert!(FaceGrid::uniform(4, Blue).is_uniform());
        assert!(!sample().is_uniform());
    }

    #[test]
    #[should_panic]
    fn column_past_the_edge_panics() {
        let _color = sample()[(0, 4)];
    }

    #[test]
    #[should_panic]
    fn column_past_the_edge_panics_mutably() {
        let mut grid = sample();
        grid[(1, 3)] = Red;
    }
}
