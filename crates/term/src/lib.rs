//! Terminal presentation.
//!
//! Rendering is split in two so the interesting half stays testable:
//!
//! - [`game_view`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure)
//! - [`renderer`] flushes frame buffers to a terminal, sending only the runs of
//!   glyphs that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
