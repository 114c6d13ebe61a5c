//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the pure game logic, the event scheduler and the terminal front end alike.
//!
//! # Board Dimensions
//!
//! Canonical playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21)
//! - **Hidden rows**: the top 2 rows are playable and collidable but not drawn
//!
//! # Fall Speed
//!
//! The fall timer interval is derived from the score:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 1000 | Interval at score 0 |
//! | `FALL_STEP_MS` | 100 | Interval reduction per level |
//! | `SCORE_PER_LEVEL` | 10 | Score needed per level |
//! | `MIN_FALL_MS` | 50 | Default floor for the interval |
//!
//! # Examples
//!
//! ```
//! use matrix_tetris_types::{Direction, GameAction, GameEvent, PieceKind, Position};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let left = Direction::Left.delta();
//! assert_eq!(Position::new(3, 4) + left, Position::new(3, 3));
//!
//! let action = GameAction::from_str("moveRight").unwrap();
//! assert_eq!(GameEvent::from(action), GameEvent::Move(Direction::Right));
//! ```

use std::ops::Add;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (22 rows, including the hidden rows)
pub const BOARD_HEIGHT: usize = 22;

/// Rows at the top of the board that are playable but not rendered
pub const HIDDEN_ROWS: usize = 2;

/// Fall interval at level 0 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u64 = 1000;

/// Fall interval reduction per level
pub const FALL_STEP_MS: u64 = 100;

/// Score points per speed level
pub const SCORE_PER_LEVEL: u32 = 10;

/// Default lower bound for the fall interval
pub const MIN_FALL_MS: u64 = 50;

/// The seven tetromino piece kinds
///
/// Each kind doubles as the color tag of the cells it leaves on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in a fixed order used for uniform random selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, used by text renderings of the board.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Integer (row, col) offset in board coordinates.
///
/// Rows grow downwards, columns grow to the right. Candidate positions may be
/// negative or past the board edge; committed positions never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// One row down.
    pub const DOWN: Position = Position::new(1, 0);
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Horizontal move direction carried by the move signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Offset applied to the piece position.
    ///
    /// ```
    /// use matrix_tetris_types::{Direction, Position};
    ///
    /// assert_eq!(Direction::Left.delta(), Position::new(0, -1));
    /// assert_eq!(Direction::Right.delta(), Position::new(0, 1));
    /// ```
    pub fn delta(&self) -> Position {
        match self {
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
        }
    }
}

/// Player actions delivered through the input signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column
    Move(Direction),
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Drop the piece to the lowest free row and fuse it
    Drop,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use matrix_tetris_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
        }
    }
}

/// Everything the scheduler can dispatch: the fall tick plus player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Fall,
    Move(Direction),
    Rotate,
    Drop,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Fall => "fall",
            GameEvent::Move(Direction::Left) => "moveLeft",
            GameEvent::Move(Direction::Right) => "moveRight",
            GameEvent::Rotate => "rotate",
            GameEvent::Drop => "drop",
        }
    }
}

impl From<GameAction> for GameEvent {
    fn from(action: GameAction) -> Self {
        match action {
            GameAction::Move(direction) => GameEvent::Move(direction),
            GameAction::Rotate => GameEvent::Rotate,
            GameAction::Drop => GameEvent::Drop,
        }
    }
}
