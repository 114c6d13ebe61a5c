//! Terminal Tetris runner (default binary).
//!
//! `matrix-tetris` plays in the terminal; `matrix-tetris observe [--limit N]`
//! runs a game with no player and prints JSON lines.

use std::env;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use matrix_tetris::engine::{EngineConfig, GameSession};
use matrix_tetris::input::{handle_key_event, should_quit, should_restart};
use matrix_tetris::observe::{self, parse_observe_args};
use matrix_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long one key poll may block before the loop checks for new snapshots.
const POLL_MS: u64 = 16;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let observe_options = parse_observe_args(&args)?;
    init_tracing(observe_options.is_some())?;

    let config = load_config();
    config.validate()?;

    if let Some(options) = observe_options {
        let runtime = tokio::runtime::Runtime::new()?;
        let mut stdout = io::stdout().lock();
        runtime.block_on(observe::run(&config, options, &mut stdout))?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = play(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn play(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let view = GameView::default();
    let mut session = GameSession::start(&config)?;
    let mut snapshot = session.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if let Some(next) = session.poll_snapshot() {
            snapshot = next;
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if should_quit(key) => break,
            Event::Key(key) if snapshot.game_over && should_restart(key) => {
                let finished = session.shutdown()?;
                tracing::info!(score = finished.score(), "restarting");
                session = GameSession::start(&config.clone().with_seed(clock_seed()))?;
                snapshot = session.snapshot();
                dirty = true;
            }
            Event::Key(key) => {
                if let Some(action) = handle_key_event(key) {
                    session.send(action);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }

    let finished = session.shutdown()?;
    tracing::info!(score = finished.score(), game_over = finished.game_over(), "session ended");
    Ok(())
}

/// Environment overrides on top of the defaults; the seed comes from the clock
/// unless `TETRIS_SEED` pins it.
fn load_config() -> EngineConfig {
    let config = EngineConfig::from_env();
    if env::var_os("TETRIS_SEED").is_some() {
        config
    } else {
        config.with_seed(clock_seed())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to `TETRIS_LOG_PATH` while the terminal UI owns the screen, or to
/// stderr in observe mode where stdout carries the data.
fn init_tracing(to_stderr: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
        return Ok(());
    }

    match env::var_os("TETRIS_LOG_PATH") {
        Some(path) => {
            let file = File::create(&path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
        }
        // Writing to stdout/stderr would corrupt the game screen.
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
    Ok(())
}
