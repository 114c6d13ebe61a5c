//! The event scheduler: a single-owner actor around the authoritative `GameState`.
//!
//! Four sources feed one loop: the fall timer and the move, rotate and drop
//! signals. The loop waits for whichever is ready first, dispatches exactly one
//! transition, and commits it before looking at the next event. When several
//! sources are ready in the same cycle the fixed order is
//! shutdown > fall > move > rotate > drop.
//!
//! Only this task ever writes the state. The outside world sees it through
//! snapshots published on a `watch` channel after every committed transition.

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info, trace};

use crate::core::{GameSnapshot, GameState};
use crate::signal::SignalReceiver;
use crate::types::{Direction, GameEvent};

/// Receiving ends of the three input signals.
#[derive(Debug)]
pub struct Inputs {
    pub moves: SignalReceiver<Direction>,
    pub rotations: SignalReceiver<()>,
    pub drops: SignalReceiver<()>,
}

/// Owner of the live game state.
#[derive(Debug)]
pub struct Scheduler {
    state: GameState,
    commits: u64,
    min_fall_ms: u64,
    snapshots: watch::Sender<GameSnapshot>,
}

impl Scheduler {
    /// Wrap `state` and publish its initial snapshot (commit 0).
    pub fn new(state: GameState, min_fall_ms: u64) -> (Self, watch::Receiver<GameSnapshot>) {
        let (snapshots, rx) = watch::channel(state.snapshot(0, min_fall_ms));
        let scheduler = Self {
            state,
            commits: 0,
            min_fall_ms,
            snapshots,
        };
        (scheduler, rx)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of transitions committed so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Delay before the next fall tick, from the current score.
    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.state.fall_interval_ms(self.min_fall_ms))
    }

    /// Apply one event. Returns whether the state changed.
    ///
    /// An `Unchanged` transition leaves the state and the published snapshot
    /// exactly as they were.
    pub fn dispatch(&mut self, event: GameEvent) -> bool {
        let was_over = self.state.game_over();

        if !self.state.apply(event).commit_to(&mut self.state) {
            trace!(event = event.as_str(), "transition did not apply");
            return false;
        }

        self.commits += 1;
        debug!(
            event = event.as_str(),
            commit = self.commits,
            score = self.state.score(),
            "transition committed"
        );
        if self.state.game_over() && !was_over {
            info!(score = self.state.score(), commits = self.commits, "game over");
        }

        self.snapshots
            .send_replace(self.state.snapshot(self.commits, self.min_fall_ms));
        true
    }

    /// Run until `shutdown` fires or its sender is dropped, then hand back the
    /// final state.
    ///
    /// The next fall is always due one interval after the previous one, with
    /// the interval taken from the score as it stands now. Inputs never
    /// postpone it, but a score change from an input takes effect at once.
    ///
    /// Shutdown is only observed between dispatches, so a transition is never
    /// left half-applied.
    pub async fn run(
        mut self,
        mut inputs: Inputs,
        mut shutdown: oneshot::Receiver<()>,
    ) -> GameState {
        info!(
            score = self.state.score(),
            interval_ms = self.fall_interval().as_millis() as u64,
            "scheduler started"
        );

        let mut last_tick = Instant::now();
        let fall = time::sleep_until(last_tick + self.fall_interval());
        tokio::pin!(fall);

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => break,

                () = &mut fall, if !self.state.game_over() => {
                    self.dispatch(GameEvent::Fall);
                    last_tick = Instant::now();
                }

                Some(direction) = inputs.moves.recv() => {
                    self.dispatch(GameEvent::Move(direction));
                }

                Some(()) = inputs.rotations.recv() => {
                    self.dispatch(GameEvent::Rotate);
                }

                Some(()) = inputs.drops.recv() => {
                    self.dispatch(GameEvent::Drop);
                }
            }

            fall.as_mut().reset(last_tick + self.fall_interval());
        }

        info!(
            score = self.state.score(),
            commits = self.commits,
            game_over = self.state.game_over(),
            "scheduler stopped"
        );
        self.state
    }
}
