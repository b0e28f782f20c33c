//! Scoring module - line clear points, leveling and gravity speed
//!
//! - A clear of `n` lines is worth `100 * n * n` (100, 400, 900, 1600).
//! - After a scoring lock, the level goes up by one if `score >= level * 1000`.
//!   This is checked once per lock, so a single clear never skips a level.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level,
//!   never dropping below 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, LINE_CLEAR_POINTS,
};

/// Outcome of applying a line clear to the session score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this clear
    pub points: u32,
    /// Score after the clear
    pub score: u32,
    /// Level after the clear
    pub level: u32,
    pub leveled_up: bool,
}

/// Points for clearing `lines` rows in one lock
pub fn line_clear_points(lines: usize) -> u32 {
    let n = lines as u32;
    LINE_CLEAR_POINTS.saturating_mul(n).saturating_mul(n)
}

/// Milliseconds per gravity row at a given level
pub fn drop_interval_ms(level: u32) -> u32 {
    let step = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(step).max(DROP_INTERVAL_MIN_MS)
}

/// Apply a clear of `lines` rows to `score` at `level`.
///
/// Clears of zero lines leave score and level untouched.
pub fn apply_line_clear(score: u32, level: u32, lines: usize) -> ScoreResult {
    if lines == 0 {
        return ScoreResult {
            points: 0,
            score,
            level,
            leveled_up: false,
        };
    }

    let points = line_clear_points(lines);
    let score = score.saturating_add(points);
    let leveled_up = score >= level.saturating_mul(LEVEL_SCORE_STEP);
    let level = if leveled_up { level + 1 } else { level };

    ScoreResult {
        points,
        score,
        level,
        leveled_up,
    }
}
