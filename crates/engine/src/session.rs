//! Blocking facade for callers without their own runtime.

use tokio::runtime::Runtime;
use tokio::sync::watch;

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::EngineError;
use crate::handle::{start_game, GameHandle};
use crate::types::GameAction;

/// A game running on a private tokio runtime.
///
/// The terminal front end polls keys on its own thread and only needs to push
/// actions in and pull snapshots out; this keeps tokio out of its way.
pub struct GameSession {
    handle: GameHandle,
    snapshots: watch::Receiver<GameSnapshot>,
    runtime: Runtime,
}

impl GameSession {
    /// Validate `config` and start a game on a fresh runtime.
    pub fn start(config: &EngineConfig) -> Result<Self, EngineError> {
        let runtime = Runtime::new().map_err(EngineError::Runtime)?;
        let handle = {
            let _guard = runtime.enter();
            start_game(config)?
        };
        let snapshots = handle.subscribe();
        Ok(Self {
            handle,
            snapshots,
            runtime,
        })
    }

    pub fn send(&self, action: GameAction) {
        self.handle.send(action);
    }

    /// Latest snapshot, whether or not it was seen before.
    pub fn snapshot(&self) -> GameSnapshot {
        self.handle.snapshot()
    }

    /// The newest snapshot if one was published since the last call.
    pub fn poll_snapshot(&mut self) -> Option<GameSnapshot> {
        match self.snapshots.has_changed() {
            Ok(true) => Some(self.snapshots.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Stop the scheduler, wait for it, and tear down the runtime.
    pub fn shutdown(self) -> Result<GameState, EngineError> {
        let Self {
            handle, runtime, ..
        } = self;
        runtime.block_on(handle.shutdown())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, GameAction};
    use std::time::{Duration, Instant};

    fn wait_for_snapshot(session: &mut GameSession) -> Option<GameSnapshot> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if let Some(snap) = session.poll_snapshot() {
                return Some(snap);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_session_applies_actions() {
        let mut session = GameSession::start(&EngineConfig::default().with_seed(42)).unwrap();
        let initial = session.snapshot();
        assert_eq!(initial.commit, 0);
        assert!(session.poll_snapshot().is_none());

        session.send(GameAction::Drop);
        let snap = wait_for_snapshot(&mut session).expect("drop should publish a snapshot");
        assert!(snap.commit >= 1);
        assert!(snap.cells.occupied() >= 4);

        let state = session.shutdown().unwrap();
        assert!(state.board().matrix().occupied() >= 4);
    }

    #[test]
    fn test_session_rejects_bad_config() {
        let config = EngineConfig {
            board_width: 2,
            ..EngineConfig::default()
        };
        let err = GameSession::start(&config).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_shutdown_without_input() {
        let session = GameSession::start(&EngineConfig::default()).unwrap();
        session.send(GameAction::Move(Direction::Left));
        let state = session.shutdown().unwrap();
        assert!(!state.game_over());
    }
}
