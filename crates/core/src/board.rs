//! Board module - the field of fused, at-rest cells
//!
//! The board is a fixed-size matrix (22x10 in the canonical configuration).
//! The active piece is never stored here; it is overlaid for display and fused
//! in permanently when it comes to rest.
//!
//! Coordinates: (row, col) with row 0 at the top. The top `HIDDEN_ROWS` rows are
//! collidable but not rendered.

use crate::matrix::Matrix;
use crate::pieces::Tetromino;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    matrix: Matrix,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            matrix: Matrix::empty(height, width),
        }
    }

    /// Wrap an existing matrix (used for preset boards)
    pub fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Whether the piece's bounding rectangle at `position` lies inside the board.
    ///
    /// Strict convention: the rectangle may touch but never cross any edge.
    pub fn in_bounds(&self, piece: &Tetromino, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row as usize + piece.height() <= self.height()
            && position.col as usize + piece.width() <= self.width()
    }

    /// Whether the piece can sit at `position` without leaving the board or
    /// overlapping a fused cell.
    pub fn can_place(&self, piece: &Tetromino, position: Position) -> bool {
        if !self.in_bounds(piece, position) {
            return false;
        }
        let under = self.matrix.submatrix(position, piece.size());
        !under.intersects(piece.shape())
    }

    /// Permanently write the piece into the board.
    pub fn fuse(&self, piece: &Tetromino, position: Position) -> Board {
        Board {
            matrix: self.matrix.mask(piece.shape(), position),
        }
    }

    /// Board cells with the piece drawn on top, for display.
    pub fn overlay(&self, piece: &Tetromino, position: Position) -> Matrix {
        self.matrix.mask(piece.shape(), position)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height() && self.matrix.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and push the remaining rows down.
    ///
    /// Returns the new board and the number of rows removed. Height is
    /// preserved by inserting that many empty rows at the top.
    pub fn clear_lines(&self) -> (Board, usize) {
        let width = self.width();
        let kept: Vec<&[_]> = self
            .matrix
            .rows()
            .enumerate()
            .filter(|(index, _)| !self.is_row_full(*index))
            .map(|(_, row)| row)
            .collect();
        let removed = self.height() - kept.len();
        if removed == 0 {
            return (self.clone(), 0);
        }

        let empty = vec![None; width];
        let rows: Vec<&[_]> = std::iter::repeat(empty.as_slice())
            .take(removed)
            .chain(kept)
            .collect();

        (
            Board {
                matrix: Matrix::from_rows(&rows),
            },
            removed,
        )
    }

    /// Spawn position for a piece: row 0, horizontally centered.
    pub fn spawn_position(&self, piece: &Tetromino) -> Position {
        let col = (self.width() / 2) as i32 - (piece.width() / 2) as i32;
        Position::new(0, col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_HEIGHT, BOARD_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_default_board_dimensions() {
        let board = Board::default();
        assert_eq!(board.height(), 22);
        assert_eq!(board.width(), 10);
        assert_eq!(board.matrix().occupied(), 0);
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let board = Board::default();
        let o = Tetromino::new(PieceKind::O);
        let i = Tetromino::new(PieceKind::I);
        let t = Tetromino::new(PieceKind::T);

        assert_eq!(board.spawn_position(&o), Position::new(0, 4));
        assert_eq!(board.spawn_position(&i), Position::new(0, 3));
        assert_eq!(board.spawn_position(&t), Position::new(0, 4));
    }

    #[test]
    fn test_clear_lines_without_full_rows_is_identity() {
        let board = Board::default();
        let (cleared, removed) = board.clear_lines();
        assert_eq!(removed, 0);
        assert_eq!(cleared, board);
    }

    #[test]
    fn test_clear_lines_removes_only_full_rows() {
        let t = Some(PieceKind::T);
        let mut rows = vec![vec![None; 4]; 6];
        rows[3] = vec![t; 4];
        rows[4] = vec![t, None, t, t];
        rows[5] = vec![t; 4];
        let board = Board::from_matrix(Matrix::from_rows(&rows));

        assert!(board.is_row_full(3));
        assert!(!board.is_row_full(4));
        assert!(!board.is_row_full(6));

        let (cleared, removed) = board.clear_lines();
        assert_eq!(removed, 2);
        assert_eq!(cleared.height(), 6);
        assert_eq!(cleared.matrix().row(5), &[t, None, t, t][..]);
        assert!((0..5).all(|row| cleared.matrix().row(row).iter().all(Option::is_none)));
    }
}
