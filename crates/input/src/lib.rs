//! Terminal input.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] plus the two
//! session-level commands (quit, restart) that never reach the engine.

pub mod map;

pub use matrix_tetris_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
