//! Headless observer: runs a game with no player and prints snapshots as
//! JSON lines.
//!
//! The observer samples the latest published snapshot each time it wakes up.
//! If the scheduler commits faster than the output is written, intermediate
//! commits are coalesced: the `commit` field still increases strictly, and
//! every gap is logged at debug level and counted in the final log line.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, GameState};
use crate::engine::{start_game, EngineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObserveOptions {
    /// Stop after this many snapshots (the initial one included).
    pub limit: Option<usize>,
}

/// Parse `observe [--limit N]`. `Ok(None)` means the arguments are not for us.
pub fn parse_observe_args(args: &[String]) -> Result<Option<ObserveOptions>> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(None);
    };
    if first != "observe" {
        return Ok(None);
    }

    let mut options = ObserveOptions::default();
    let mut rest = rest.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--limit" => {
                let v = rest
                    .next()
                    .ok_or_else(|| anyhow!("observe: missing value for --limit"))?;
                let n = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("observe: invalid --limit value: {}", v))?;
                options.limit = Some(n);
            }
            other => return Err(anyhow!("observe: unknown argument: {}", other)),
        }
    }
    Ok(Some(options))
}

/// One snapshot as written to the output stream.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    pub commit: u64,
    pub score: u32,
    pub level: u32,
    pub fall_interval_ms: u64,
    pub game_over: bool,
    pub piece: Option<char>,
    pub position: [i32; 2],
    /// Every board row top to bottom, hidden rows included. `.` is empty.
    pub board: Vec<String>,
}

impl From<&GameSnapshot> for Observation {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            commit: snap.commit,
            score: snap.score,
            level: snap.level,
            fall_interval_ms: snap.fall_interval_ms,
            game_over: snap.game_over,
            piece: snap.piece.map(|kind| kind.as_char()),
            position: [snap.position.row, snap.position.col],
            board: snap
                .cells
                .rows()
                .map(|row| row.iter().map(|c| c.map_or('.', |k| k.as_char())).collect())
                .collect(),
        }
    }
}

/// Number of commits that were never written between `last` and `commit`.
fn coalesced(last: Option<u64>, commit: u64) -> u64 {
    last.map_or(0, |last| commit.saturating_sub(last + 1))
}

/// Play `config` with only the fall timer and write snapshots to `out` until
/// game over or `options.limit` lines. Returns the final state.
pub async fn run<W: Write>(
    config: &EngineConfig,
    options: ObserveOptions,
    out: &mut W,
) -> Result<GameState> {
    let handle = start_game(config)?;
    let mut snapshots = handle.subscribe();
    let mut written = 0usize;
    let mut skipped = 0u64;
    let mut last_commit = None;

    loop {
        if options.limit.is_some_and(|limit| written >= limit) {
            break;
        }
        let snap = snapshots.borrow_and_update().clone();
        let gap = coalesced(last_commit, snap.commit);
        if gap > 0 {
            tracing::debug!(commit = snap.commit, skipped = gap, "commits coalesced");
            skipped += gap;
        }
        last_commit = Some(snap.commit);

        serde_json::to_writer(&mut *out, &Observation::from(&snap))?;
        out.write_all(b"\n")?;
        out.flush()?;
        written += 1;

        if snap.game_over || snapshots.changed().await.is_err() {
            break;
        }
    }

    tracing::info!(lines = written, skipped, "observer finished");
    Ok(handle.shutdown().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesced_counts_missing_commits() {
        assert_eq!(coalesced(None, 0), 0);
        assert_eq!(coalesced(None, 4), 0);
        assert_eq!(coalesced(Some(0), 1), 0);
        assert_eq!(coalesced(Some(2), 6), 3);
        assert_eq!(coalesced(Some(6), 6), 0);
    }
}
