//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state transitions. It has **zero
//! dependencies** on timers, threads, UI or I/O, making it:
//!
//! - **Deterministic**: the RNG is part of the state, so a seed replays a game
//! - **Immutable**: every transition returns a new [`GameState`]
//! - **Testable**: rules are plain functions over plain values
//!
//! # Module Structure
//!
//! - [`matrix`]: rectangular cell grids with submatrix, mask, rotation and intersection
//! - [`board`]: the field of fused cells, bounds and collision rules, line clearing
//! - [`pieces`]: the seven canonical tetromino shapes
//! - [`game_state`]: spawn / move / rotate / drop / fuse / fall transitions
//! - [`rng`]: seedable uniform piece selection
//! - [`scoring`]: speed levels and the fall interval
//! - [`snapshot`]: read-only view for presentation
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::GameState;
//! use matrix_tetris_types::{Direction, GameEvent, PieceKind};
//!
//! let game = GameState::new(12345).spawn_kind(PieceKind::O);
//!
//! // Transitions return new states; `game` itself never changes.
//! let moved = game.apply(GameEvent::Move(Direction::Left));
//! assert!(moved.is_changed());
//!
//! let dropped = game.apply(GameEvent::Drop).into_state().unwrap();
//! assert_eq!(dropped.board().matrix().occupied(), 4);
//! assert_eq!(dropped.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use matrix_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Transition};
pub use matrix::{Matrix, Size};
pub use pieces::{spawn_shape, Tetromino};
pub use rng::SimpleRng;
pub use scoring::{fall_interval_ms, level_for_score};
pub use snapshot::GameSnapshot;
