//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//!
//! # Cell Values
//!
//! A board or piece cell is a small integer: `0` is empty and `1..=7` names the
//! shape that filled it (which also selects its color).
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up by 100ms per level and floors at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeKind, BOARD_COLUMNS, BOARD_ROWS};
//!
//! assert_eq!(ShapeKind::from_id(6), Some(ShapeKind::O));
//! assert_eq!(ShapeKind::O.id(), 6);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Frame cadence used by the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Drop interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval reduction per level gained
pub const DROP_STEP_MS: u32 = 100;

/// Fastest possible drop interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Base points per cleared line; a clear of `n` lines scores `n * n * LINE_CLEAR_POINTS`
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Score needed per level: leveling up happens once `score >= level * LEVEL_SCORE_STEP`
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// A cell value: `0` = empty, `1..=7` = filled by the shape with that id
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven shape kinds, numbered by their cell value
///
/// - **Z** (1): red
/// - **J** (2): blue
/// - **S** (3): green
/// - **T** (4): purple
/// - **L** (5): orange
/// - **O** (6): yellow, 2x2 square
/// - **I** (7): light blue, 4x4 bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Z,
    J,
    S,
    T,
    L,
    O,
    I,
}

impl ShapeKind {
    /// All kinds in id order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::I,
    ];

    /// Cell value written by this shape (1..=7)
    pub fn id(self) -> Cell {
        match self {
            ShapeKind::Z => 1,
            ShapeKind::J => 2,
            ShapeKind::S => 3,
            ShapeKind::T => 4,
            ShapeKind::L => 5,
            ShapeKind::O => 6,
            ShapeKind::I => 7,
        }
    }

    /// Look up a kind by its cell value
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_id(1), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_id(7), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_id(0), None);
    /// assert_eq!(ShapeKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Single-letter name, used by the preview panel
    pub fn letter(self) -> &'static str {
        match self {
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::I => "I",
        }
    }
}

/// Direction of a 90° rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The direction that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Lifecycle of a game session
///
/// `Running ⇄ Paused` via the pause toggle; `Running → GameOver` when a freshly
/// spawned piece collides. `GameOver` only leaves through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Commands that can be applied to a game session
///
/// Keyboard input and the start/pause controls both funnel through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if blocked
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this action moves the falling piece (as opposed to controlling the session)
    pub fn is_gameplay(&self) -> bool {
        !matches!(self, GameAction::Pause | GameAction::Restart)
    }
}

/// Event emitted after a piece locks.
///
/// The UI reads it to refresh the score and level labels and to announce the
/// final score when the lock ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}
