//! Loop driver module - turns real time into engine ticks.
//!
//! The simulation in `core` only understands "this many milliseconds passed".
//! This crate owns the frame-to-frame timestamp bookkeeping and the UI control
//! flow around it (start/restart, pause/resume), and asks an injected
//! [`FrameScheduler`] for the next frame instead of depending on any particular
//! timer or display primitive.

pub mod driver;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{pause_label, FrameOutcome, FrameScheduler, LoopDriver};
