use crate::matrix::Matrix;
use crate::types::{Cell, PieceKind, Position, HIDDEN_ROWS};

/// Read-only view of a committed game state, handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board cells with the active piece overlaid.
    pub cells: Matrix,
    pub piece: Option<PieceKind>,
    pub position: Position,
    pub score: u32,
    pub level: u32,
    pub fall_interval_ms: u64,
    pub game_over: bool,
    /// Number of transitions committed before this snapshot was taken.
    pub commit: u64,
}

impl GameSnapshot {
    /// Rows that are drawn on screen (the hidden rows at the top are skipped).
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.rows().skip(self.hidden_rows())
    }

    pub fn visible_height(&self) -> usize {
        self.cells.height() - self.hidden_rows()
    }

    /// Boards no taller than the hidden band are drawn in full.
    fn hidden_rows(&self) -> usize {
        if self.cells.height() > HIDDEN_ROWS {
            HIDDEN_ROWS
        } else {
            0
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
