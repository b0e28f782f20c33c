//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven piece templates
//! - [`piece`]: Square cell matrices, in-place rotation, and the falling piece
//! - [`board`]: Fixed-size grid with line clearing and compaction
//! - [`collision`]: Piece-versus-board overlap test
//! - [`scoring`]: Line clear points, leveling, and gravity speed
//! - [`rng`]: Seeded uniform shape selection
//! - [`game_engine`]: The session state machine tying it all together
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Game Rules
//!
//! - A new piece spawns on row 0, horizontally centered; if it collides there
//!   the game is over.
//! - Rotation kicks sideways by +1, -2, +3, ... until it fits or gives up.
//! - Clearing `n` lines at once scores `100 * n²`; every 1000 points per level
//!   raises the level, and each level drops 100ms faster (floor 100ms).
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.board().filled_rows() > 0);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::tick`](game_engine::GameEngine::tick) every frame with the
//! real time elapsed since the previous frame. Once more than the current drop
//! interval has accumulated, the piece falls one row.

pub mod board;
pub mod collision;
pub mod game_engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Probe};
pub use collision::collides;
pub use game_engine::GameEngine;
pub use piece::{Piece, ShapeMatrix, MAX_SHAPE_SIZE};
pub use rng::ShapeGenerator;
pub use scoring::{apply_line_clear, drop_interval_ms, line_clear_points, ScoreResult};
pub use shapes::shape_for;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
