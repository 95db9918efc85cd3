use std::{fmt::Debug, ops::Index};

use fastrand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, FaceGrid, MIN_SIZE, ScrambleConfig, grid::GridError, scramble};

/// The six faces of the cube, as seen from the current front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// Storage order. Also the argument order of [`Cube::from_faces`].
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Back, Left, Right, Top, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face shows when the cube is solved.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Left => Color::Blue,
            Face::Right => Color::Green,
            Face::Top => Color::Yellow,
            Face::Bottom => Color::White,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("Face {face:?} is {actual}x{actual} but the front face is {expected}x{expected}")]
    MismatchedFaceSize {
        face: Face,
        expected: usize,
        actual: usize,
    },
    #[error("Faces must be at least 2x2, got {0}x{0}")]
    TooSmall(usize),
    #[error("Invalid grid for face {face:?}: {source}")]
    InvalidGrid {
        face: Face,
        #[source]
        source: GridError,
    },
    #[error("The cube holds {actual} {color} facelets but needs exactly {expected}")]
    UnbalancedColors {
        color: Color,
        expected: usize,
        actual: usize,
    },
}

/// Six facelet grids of one shared size.
///
/// The only ways to change a cube after construction are layer turns and
/// whole-cube reorientations, both of which permute facelets. The multiset of
/// colors therefore never changes once a cube exists.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    faces: [FaceGrid; 6],
}

impl Cube {
    /// A solved cube. Sizes below 2 are clamped to 2.
    pub fn new_solved(size: usize) -> Self {
        let size = size.max(MIN_SIZE);
        Self {
            size,
            faces: Face::ALL.map(|face| FaceGrid::uniform(size, face.solved_color())),
        }
    }

    /// A solved cube that has been scrambled with moves drawn from `rng`.
    pub fn new_scrambled(size: usize, config: &ScrambleConfig, rng: &mut Rng) -> Self {
        let mut cube = Self::new_solved(size);
        scramble(&mut cube, config, rng);
        cube
    }

    /// A cube holding exactly the given grids, in [`Face::ALL`] order.
    ///
    /// The grids may describe any position, including ones with unbalanced
    /// color counts; only their shape is checked.
    ///
    /// # Errors
    ///
    /// If the grids do not all share one size, or that size is below 2.
    pub fn from_faces(faces: [FaceGrid; 6]) -> Result<Self, CubeError> {
        let size = faces[Face::Front as usize].size();

        if size < MIN_SIZE {
            return Err(CubeError::TooSmall(size));
        }

        for (face, grid) in Face::ALL.into_iter().zip(&faces) {
            if grid.size() != size {
                return Err(CubeError::MismatchedFaceSize {
                    face,
                    expected: size,
                    actual: grid.size(),
                });
            }
        }

        Ok(Self { size, faces })
    }

    /// Like [`Cube::from_faces`] but taking each face as nested rows.
    ///
    /// # Errors
    ///
    /// If a face is not square, or see [`Cube::from_faces`].
    pub fn from_rows<R: AsRef<[Color]>>(faces: [&[R]; 6]) -> Result<Self, CubeError> {
        let [front, back, left, right, top, bottom] = Face::ALL.map(|face| {
            FaceGrid::from_rows(faces[face as usize])
                .map_err(|source| CubeError::InvalidGrid { face, source })
        });
        Self::from_faces([front?, back?, left?, right?, top?, bottom?])
    }

    /// Like [`Cube::from_faces`] but also requires `size * size` facelets of
    /// every color, as any position reachable from a solved cube has.
    ///
    /// # Errors
    ///
    /// If a color appears the wrong number of times, or see [`Cube::from_faces`].
    pub fn from_faces_balanced(faces: [FaceGrid; 6]) -> Result<Self, CubeError> {
        let cube = Self::from_faces(faces)?;
        let expected = cube.size * cube.size;

        for (color, actual) in Color::ALL.into_iter().zip(cube.color_counts()) {
            if actual != expected {
                return Err(CubeError::UnbalancedColors {
                    color,
                    expected,
                    actual,
                });
            }
        }

        Ok(cube)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// All six grids in [`Face::ALL`] order.
    pub fn faces(&self) -> &[FaceGrid; 6] {
        &self.faces
    }

    /// Whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    /// How many facelets of each color the cube holds, indexed by
    /// `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &color in self.faces.iter().flat_map(FaceGrid::cells) {
            counts[color as usize] += 1;
        }
        counts
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face as usize]
    }

    /// Make `cycle[0]` take the grid of `cycle[1]`, `cycle[1]` that of
    /// `cycle[2]`, and so on around to `cycle[3]` taking the old `cycle[0]`.
    pub(crate) fn cycle_faces(&mut self, cycle: [Face; 4]) {
        for pair in cycle.windows(2) {
            self.faces.swap(pair[0] as usize, pair[1] as usize);
        }
    }
}

impl Index<Face> for Cube {
    type Output = FaceGrid;

    fn index(&self, index: Face) -> &Self::Output {
        &self.faces[index as usize]
    }
}

impl Debug for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Cube");
        s.field("size", &self.size);
        for face in Face::ALL {
            let rows: Vec<String> = self[face]
                .rows()
                .map(|row| row.iter().copied().map(Color::initial).collect())
                .collect();
            s.field(&format!("{face:?}"), &rows);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_balanced_colors() {
        for size in 2..=5 {
            let cube = Cube::new_solved(size);
            assert!(cube.is_solved());
            assert_eq!(cube.color_counts(), [size * size; 6]);
            for face in Face::ALL {
                assert!(cube[face].cells().iter().all(|&c| c == face.solved_color()));
            }
        }
    }

    #[test]
    fn small_sizes_are_clamped() {
        assert_eq!(Cube::new_solved(0).size(), 2);
        assert_eq!(Cube::new_solved(1).size(), 2);
    }

    #[test]
    fn cycle_faces_rotates_labels() {
        let mut cube = Cube::new_solved(2);
        cube.cycle_faces([Face::Front, Face::Right, Face::Back, Face::Left]);
        assert_eq!(cube[Face::Front][(0, 0)], Color::Green);
        assert_eq!(cube[Face::Right][(0, 0)], Color::Orange);
        assert_eq!(cube[Face::Back][(0, 0)], Color::Blue);
        assert_eq!(cube[Face::Left][(0, 0)], Color::Red);
    }

    #[test]
    fn from_faces_rejects_mismatched_sizes() {
        let mut faces = Face::ALL.map(|face| FaceGrid::uniform(3, face.solved_color()));
        faces[Face::Top as usize] = FaceGrid::uniform(2, Color::Yellow);
        assert_eq!(
            Cube::from_faces(faces),
            Err(CubeError::MismatchedFaceSize {
                face: Face::Top,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn from_faces_rejects_tiny_faces() {
        let faces = Face::ALL.map(|face| FaceGrid::uniform(1, face.solved_color()));
        assert_eq!(Cube::from_faces(faces), Err(CubeError::TooSmall(1)));
    }

    #[test]
    fn balanced_constructor_checks_color_counts() {
        let mut faces = Face::ALL.map(|face| FaceGrid::uniform(3, face.solved_color()));
        faces[Face::Front as usize][(1, 1)] = Color::White;
        assert_eq!(
            Cube::from_faces_balanced(faces.clone()),
            Err(CubeError::UnbalancedColors {
                color: Color::Red,
                expected: 9,
                actual: 8
            })
        );
        assert!(Cube::from_faces(faces.clone()).is_ok());

        faces[Face::Bottom as usize][(0, 2)] = Color::Red;
        let cube = Cube::from_faces_balanced(faces).unwrap();
        assert!(!cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);
    }
}
