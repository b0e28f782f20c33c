//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and drops gameplay
//! commands that arrive while the session is paused or over.

pub mod map;

pub use blockfall_types as types;

pub use map::{filter_for_phase, handle_key_event, should_quit};
