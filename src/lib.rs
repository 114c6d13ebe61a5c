//! Matrix Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `matrix_tetris::{core, engine, input, term, types}` and hosts the
//! binary's headless [`observe`] mode.

pub use matrix_tetris_core as core;
pub use matrix_tetris_engine as engine;
pub use matrix_tetris_input as input;
pub use matrix_tetris_term as term;
pub use matrix_tetris_types as types;

pub mod observe;
