//! Engine configuration.
//!
//! Defaults match the canonical game (10x22 board, 50ms fall floor). Each value
//! can be overridden from the environment:
//!
//! - `TETRIS_SEED`: RNG seed (u32)
//! - `TETRIS_BOARD_WIDTH`: board columns
//! - `TETRIS_BOARD_HEIGHT`: board rows, including the 2 hidden rows
//! - `TETRIS_MIN_FALL_MS`: lower bound for the fall interval
//!
//! Unparsable values fall back to the default; out-of-range values are caught
//! by [`EngineConfig::validate`].

use std::env;

use crate::core::Board;
use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, MIN_FALL_MS};

/// Narrowest board that still fits the I piece.
pub const MIN_BOARD_WIDTH: usize = 4;

/// Shortest board: room for a vertical I piece below the hidden rows.
pub const MIN_BOARD_HEIGHT: usize = 4 + HIDDEN_ROWS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u32,
    pub board_width: usize,
    pub board_height: usize,
    pub min_fall_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            min_fall_ms: MIN_FALL_MS,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            seed: env_parse("TETRIS_SEED").unwrap_or(defaults.seed),
            board_width: env_parse("TETRIS_BOARD_WIDTH").unwrap_or(defaults.board_width),
            board_height: env_parse("TETRIS_BOARD_HEIGHT").unwrap_or(defaults.board_height),
            min_fall_ms: env_parse("TETRIS_MIN_FALL_MS").unwrap_or(defaults.min_fall_ms),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MIN_BOARD_WIDTH {
            return Err(ConfigError::BoardTooNarrow {
                width: self.board_width,
                min: MIN_BOARD_WIDTH,
            });
        }
        if self.board_height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooShort {
                height: self.board_height,
                min: MIN_BOARD_HEIGHT,
            });
        }
        if self.min_fall_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }

    /// Empty board with the configured dimensions.
    pub fn board(&self) -> Board {
        Board::new(self.board_height, self.board_width)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
