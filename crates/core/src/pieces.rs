//! Pieces module - the seven canonical tetromino shapes
//!
//! Each shape is stored once, in spawn orientation, as a tight bounding-box
//! matrix (no empty border rows or columns). Other orientations are derived by
//! rotating that matrix.

use crate::matrix::{Matrix, Size};
use crate::types::{Cell, PieceKind};

/// A piece kind together with its current shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    shape: Matrix,
}

impl Tetromino {
    /// Create a tetromino in spawn orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Matrix {
        &self.shape
    }

    pub fn size(&self) -> Size {
        self.shape.size()
    }

    pub fn width(&self) -> usize {
        self.shape.width()
    }

    pub fn height(&self) -> usize {
        self.shape.height()
    }

    /// Same piece rotated 90° clockwise.
    pub fn rotated_clockwise(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotate_clockwise(),
        }
    }

    /// Same piece rotated 90° counterclockwise.
    pub fn rotated_counterclockwise(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotate_counterclockwise(),
        }
    }
}

/// Spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Matrix {
    let k = Some(kind);
    let e: Cell = None;
    match kind {
        PieceKind::I => Matrix::from_rows(&[[k, k, k, k]]),
        PieceKind::J => Matrix::from_rows(&[[k, e, e], [k, k, k]]),
        PieceKind::L => Matrix::from_rows(&[[e, e, k], [k, k, k]]),
        PieceKind::O => Matrix::from_rows(&[[k, k], [k, k]]),
        PieceKind::S => Matrix::from_rows(&[[e, k, k], [k, k, e]]),
        PieceKind::T => Matrix::from_rows(&[[e, k, e], [k, k, k]]),
        PieceKind::Z => Matrix::from_rows(&[[k, k, e], [e, k, k]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells_of_its_kind() {
        for kind in PieceKind::ALL {
            let shape = spawn_shape(kind);
            assert_eq!(shape.occupied(), 4, "{kind:?}");
            assert!(shape.cells().iter().flatten().all(|&k| k == kind));
        }
    }

    #[test]
    fn test_i_rotation_is_vertical() {
        let piece = Tetromino::new(PieceKind::I).rotated_clockwise();
        assert_eq!(piece.size(), Size::new(4, 1));
        assert_eq!(piece.kind(), PieceKind::I);
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let piece = Tetromino::new(PieceKind::O);
        assert_eq!(piece.rotated_clockwise(), piece);
        assert_eq!(piece.rotated_counterclockwise(), piece);
    }
}
