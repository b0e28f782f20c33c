//! Frame loop driver.

use tracing::debug;

use crate::core::GameEngine;
use crate::types::LockEvent;

/// Capability to request one more frame callback at the display cadence.
///
/// The driver calls this at most once per frame and only while the game is
/// running. Not calling it is how the loop stops.
pub trait FrameScheduler {
    fn schedule_next_frame(&mut self);
}

/// Label for the pause/resume control.
pub fn pause_label(engine: &GameEngine) -> &'static str {
    if engine.is_paused() {
        "Resume"
    } else {
        "Pause"
    }
}

/// What happened during one driven frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Elapsed time handed to the engine this frame
    pub delta_ms: u32,
    /// Whether gravity moved or locked the piece
    pub dropped: bool,
    /// Lock event produced by this frame, if any
    pub lock: Option<LockEvent>,
    /// Whether another frame was scheduled
    pub rescheduled: bool,
}

/// Drives a [`GameEngine`] from frame timestamps.
#[derive(Debug)]
pub struct LoopDriver<S> {
    scheduler: S,
    /// Timestamp of the previous frame; `None` right after start/resume so the
    /// first frame sees a zero delta.
    last_frame_ms: Option<u64>,
}

impl<S: FrameScheduler> LoopDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            last_frame_ms: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start (or restart) the game and kick off the frame loop.
    pub fn start(&mut self, engine: &mut GameEngine) {
        engine.restart();
        self.last_frame_ms = None;
        self.scheduler.schedule_next_frame();
    }

    /// Pause/resume control. Resuming restarts the frame clock and the loop.
    ///
    /// Returns true if the engine changed state.
    pub fn toggle_pause(&mut self, engine: &mut GameEngine) -> bool {
        if !engine.toggle_pause() {
            return false;
        }
        if engine.is_running() {
            self.last_frame_ms = None;
            self.scheduler.schedule_next_frame();
        }
        true
    }

    /// Run one frame at time `now_ms`.
    ///
    /// Does nothing (and schedules nothing) unless the engine is running.
    pub fn frame(&mut self, engine: &mut GameEngine, now_ms: u64) -> FrameOutcome {
        if !engine.is_running() {
            self.last_frame_ms = None;
            return FrameOutcome::default();
        }

        let delta = match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);
        let delta_ms = u32::try_from(delta).unwrap_or(u32::MAX);

        let dropped = engine.tick(delta_ms);
        let lock = engine.take_last_event();
        if let Some(event) = lock {
            debug!(
                lines = event.lines_cleared,
                points = event.points,
                game_over = event.game_over,
                "gravity lock"
            );
        }

        let rescheduled = engine.is_running();
        if rescheduled {
            self.scheduler.schedule_next_frame();
        }

        FrameOutcome {
            delta_ms,
            dropped,
            lock,
            rescheduled,
        }
    }
}
