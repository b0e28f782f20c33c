//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `blockfall::term`. The frame loop is driven by [`LoopDriver`], which asks
//! this runner for the next frame through [`FrameScheduler`].

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::GameEngine;
use blockfall::engine::{FrameScheduler, LoopDriver};
use blockfall::input::{filter_for_phase, handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, FRAME_MS};

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Seed for the shape generator (random if omitted)
    #[arg(long, env = "TETRIS_SEED")]
    seed: Option<u64>,

    /// Frame cadence in milliseconds
    #[arg(long, env = "TETRIS_FRAME_MS", default_value_t = FRAME_MS as u64)]
    frame_ms: u64,

    /// Write logs to this file (the terminal itself is used by the game)
    #[arg(long, env = "TETRIS_LOG_FILE")]
    log_file: Option<PathBuf>,
}

/// Frame requests are recorded and served by the main loop at the next
/// frame boundary.
#[derive(Debug, Default)]
struct PendingFrame {
    requested: bool,
}

impl PendingFrame {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl FrameScheduler for PendingFrame {
    fn schedule_next_frame(&mut self) {
        self.requested = true;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(seed, frame_ms = cli.frame_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, Duration::from_millis(cli.frame_ms.max(1)));

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(score) = &result {
        println!("Final score: {score}");
    }
    result.map(|_| ())
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Play until the user quits. Returns the score at exit.
fn run(term: &mut TerminalRenderer, seed: u64, frame: Duration) -> Result<u32> {
    let mut engine = GameEngine::new(seed);
    let mut driver = LoopDriver::new(PendingFrame::default());
    driver.start(&mut engine);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let clock = Instant::now();
    let mut next_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(engine.score());
                    }
                    if let Some(action) = handle_key_event(key)
                        .and_then(|action| filter_for_phase(action, engine.phase()))
                    {
                        debug!(action = action.as_str(), phase = engine.phase().as_str(), "key");
                        match action {
                            GameAction::Restart => driver.start(&mut engine),
                            GameAction::Pause => {
                                driver.toggle_pause(&mut engine);
                            }
                            _ => {
                                engine.apply_action(action);
                            }
                        }
                        if let Some(lock) = engine.take_last_event() {
                            if lock.game_over {
                                info!(score = engine.score(), "final score");
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if Instant::now() >= next_frame {
            next_frame = Instant::now() + frame;
            if driver.scheduler_mut().take() {
                let now_ms = clock.elapsed().as_millis() as u64;
                let outcome = driver.frame(&mut engine, now_ms);
                if outcome.lock.is_some_and(|lock| lock.game_over) {
                    info!(score = engine.score(), "final score");
                }
            }
        }
    }
}
