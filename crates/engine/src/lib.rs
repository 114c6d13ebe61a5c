//! Concurrent driver for the game: one scheduler task owns the state and
//! applies events from a fall timer and three input signals, one at a time.
//!
//! - [`signal`]: single-slot, latest-wins input channels
//! - [`scheduler`]: the `select!` loop that serialises every transition
//! - [`handle`]: [`start_game`] and the [`GameHandle`] used to drive a game
//! - [`session`]: a blocking wrapper that carries its own runtime
//! - [`config`]: board size, seed and speed floor, with env overrides

pub mod config;
pub mod error;
pub mod handle;
pub mod scheduler;
pub mod session;
pub mod signal;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError};
pub use handle::{start_game, start_game_with, GameHandle};
pub use scheduler::Scheduler;
pub use session::GameSession;
