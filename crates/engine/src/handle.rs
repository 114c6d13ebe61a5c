//! Starting a game and talking to its scheduler.

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::EngineError;
use crate::scheduler::{Inputs, Scheduler};
use crate::signal::{self, SignalSender};
use crate::types::{Direction, GameAction};

/// Client side of a running game.
///
/// Every input method is fire-and-forget: the value lands in a single-slot
/// signal and the scheduler picks it up on its next cycle. Dropping the handle
/// stops the scheduler as if [`GameHandle::shutdown`] had been called.
#[derive(Debug)]
pub struct GameHandle {
    moves: SignalSender<Direction>,
    rotations: SignalSender<()>,
    drops: SignalSender<()>,
    snapshots: watch::Receiver<GameSnapshot>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<GameState>,
}

/// Validate `config`, build a fresh game from it and spawn its scheduler.
///
/// Must be called from inside a tokio runtime.
pub fn start_game(config: &EngineConfig) -> Result<GameHandle, EngineError> {
    config.validate()?;
    let state = GameState::with_board(config.board(), config.seed);
    info!(
        seed = config.seed,
        width = config.board_width,
        height = config.board_height,
        "starting game"
    );
    Ok(start_game_with(state, config.min_fall_ms))
}

/// Spawn a scheduler that owns an existing `state`.
///
/// Useful for replays and tests that need a particular board or piece.
/// Must be called from inside a tokio runtime.
pub fn start_game_with(state: GameState, min_fall_ms: u64) -> GameHandle {
    let (moves, moves_rx) = signal::channel();
    let (rotations, rotations_rx) = signal::channel();
    let (drops, drops_rx) = signal::channel();
    let (shutdown, shutdown_rx) = oneshot::channel();

    let (scheduler, snapshots) = Scheduler::new(state, min_fall_ms);
    let inputs = Inputs {
        moves: moves_rx,
        rotations: rotations_rx,
        drops: drops_rx,
    };
    let task = tokio::spawn(scheduler.run(inputs, shutdown_rx));

    GameHandle {
        moves,
        rotations,
        drops,
        snapshots,
        shutdown,
        task,
    }
}

impl GameHandle {
    pub fn move_piece(&self, direction: Direction) {
        self.moves.send(direction);
    }

    pub fn rotate(&self) {
        self.rotations.send(());
    }

    pub fn drop_piece(&self) {
        self.drops.send(());
    }

    /// Route a player action to its signal.
    pub fn send(&self, action: GameAction) {
        match action {
            GameAction::Move(direction) => self.move_piece(direction),
            GameAction::Rotate => self.rotate(),
            GameAction::Drop => self.drop_piece(),
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the scheduler and return the final state.
    ///
    /// The transition in flight, if any, completes first.
    pub async fn shutdown(self) -> Result<GameState, EngineError> {
        // The task may already be gone; the join below reports why.
        let _ = self.shutdown.send(());
        Ok(self.task.await?)
    }
}
