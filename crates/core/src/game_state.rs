//! Game state module - the pure game-state machine
//!
//! A `GameState` is an immutable value. Every transition takes `&self` and
//! produces a complete replacement state; nothing is edited in place. Moves that
//! do not apply (blocked, out of bounds, no active piece, game over) yield
//! [`Transition::Unchanged`] so the caller can keep the previous state.
//!
//! The random source lives inside the state, which makes every transition a
//! deterministic function of its input: two equal states always produce equal
//! successors, including the kind of the next spawned piece.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::rng::SimpleRng;
use crate::scoring::{fall_interval_ms, level_for_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameEvent, PieceKind, Position};
use crate::Matrix;

/// Result of a transition that may not apply.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The transition applied and produced a new state.
    Changed(GameState),
    /// The transition does not apply; the previous state stands.
    Unchanged,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Transition::Unchanged)
    }

    /// The new state, if any.
    pub fn into_state(self) -> Option<GameState> {
        match self {
            Transition::Changed(state) => Some(state),
            Transition::Unchanged => None,
        }
    }

    /// Replace `state` with the new state, if any. Returns whether it was replaced.
    pub fn commit_to(self, state: &mut GameState) -> bool {
        match self {
            Transition::Changed(next) => {
                *state = next;
                true
            }
            Transition::Unchanged => false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    piece: Option<Tetromino>,
    position: Position,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Start a game on an empty canonical board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Start a game on a preset board and spawn the first piece
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            piece: None,
            position: Position::default(),
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
        }
        .spawn_piece()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&Tetromino> {
        self.piece.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Current fall timer interval in milliseconds, floored at `min_ms`.
    pub fn fall_interval_ms(&self, min_ms: u64) -> u64 {
        fall_interval_ms(self.score, min_ms)
    }

    /// The piece gameplay transitions may act on: present and not game over.
    fn active(&self) -> Option<&Tetromino> {
        if self.game_over {
            return None;
        }
        self.piece.as_ref()
    }

    /// Spawn a uniformly random piece at the top center.
    ///
    /// Always produces a state. If the piece cannot be placed the new state is
    /// game over; the board itself is left untouched.
    pub fn spawn_piece(&self) -> GameState {
        let mut next = self.clone();
        let kind = next.rng.next_kind();
        next.place_new_piece(kind);
        next
    }

    /// Spawn a specific piece kind at the top center.
    ///
    /// Same rules as [`GameState::spawn_piece`] without consuming randomness.
    pub fn spawn_kind(&self, kind: PieceKind) -> GameState {
        let mut next = self.clone();
        next.place_new_piece(kind);
        next
    }

    fn place_new_piece(&mut self, kind: PieceKind) {
        let piece = Tetromino::new(kind);
        let position = self.board.spawn_position(&piece);
        if !self.board.can_place(&piece, position) {
            self.game_over = true;
        }
        self.piece = Some(piece);
        self.position = position;
    }

    /// Shift the active piece by `delta` if the target is free.
    pub fn move_piece(&self, delta: Position) -> Transition {
        let Some(piece) = self.active() else {
            return Transition::Unchanged;
        };

        let candidate = self.position + delta;
        if !self.board.can_place(piece, candidate) {
            return Transition::Unchanged;
        }

        Transition::Changed(GameState {
            position: candidate,
            ..self.clone()
        })
    }

    /// Rotate the active piece clockwise in place (no wall kicks).
    pub fn rotate_piece(&self) -> Transition {
        let Some(piece) = self.active() else {
            return Transition::Unchanged;
        };

        let rotated = piece.rotated_clockwise();
        if !self.board.can_place(&rotated, self.position) {
            return Transition::Unchanged;
        }

        Transition::Changed(GameState {
            piece: Some(rotated),
            ..self.clone()
        })
    }

    /// Move the piece down as far as it goes, then fuse it.
    pub fn drop_piece(&self) -> Transition {
        if self.active().is_none() {
            return Transition::Unchanged;
        }

        let mut landed = self.clone();
        while let Transition::Changed(lower) = landed.move_piece(Position::DOWN) {
            landed = lower;
        }
        landed.fuse_piece()
    }

    /// Write the piece into the board, clear full rows, spawn the next piece.
    pub fn fuse_piece(&self) -> Transition {
        let Some(piece) = self.active() else {
            return Transition::Unchanged;
        };

        let fused = GameState {
            board: self.board.fuse(piece, self.position),
            piece: None,
            ..self.clone()
        };
        Transition::Changed(fused.clear_lines().spawn_piece())
    }

    /// Remove full rows; each removed row scores one point.
    pub fn clear_lines(&self) -> GameState {
        let (board, removed) = self.board.clear_lines();
        GameState {
            board,
            score: self.score + removed as u32,
            ..self.clone()
        }
    }

    /// Gravity: move down one row, or fuse if the piece has landed.
    pub fn fall_tick(&self) -> Transition {
        if self.active().is_none() {
            return Transition::Unchanged;
        }

        match self.move_piece(Position::DOWN) {
            Transition::Unchanged => self.fuse_piece(),
            moved => moved,
        }
    }

    /// Dispatch an event to its transition.
    pub fn apply(&self, event: GameEvent) -> Transition {
        match event {
            GameEvent::Fall => self.fall_tick(),
            GameEvent::Move(direction) => self.move_piece(direction.delta()),
            GameEvent::Rotate => self.rotate_piece(),
            GameEvent::Drop => self.drop_piece(),
        }
    }

    /// Board cells with the current piece drawn on top.
    pub fn display(&self) -> Matrix {
        match &self.piece {
            Some(piece) => self.board.overlay(piece, self.position),
            None => self.board.matrix().clone(),
        }
    }

    /// Read-only view for presentation.
    pub fn snapshot(&self, commit: u64, min_fall_ms: u64) -> GameSnapshot {
        GameSnapshot {
            cells: self.display(),
            piece: self.piece.as_ref().map(Tetromino::kind),
            position: self.position,
            score: self.score,
            level: self.level(),
            fall_interval_ms: self.fall_interval_ms(min_fall_ms),
            game_over: self.game_over,
            commit,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
