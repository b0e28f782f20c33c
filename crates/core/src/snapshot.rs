use crate::piece::{Piece, ShapeMatrix};
use crate::shapes::shape_for;
use crate::types::{Cell, GamePhase, ShapeKind, BOARD_COLUMNS, BOARD_ROWS, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLUMNS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub next: ShapeKind,
    pub next_matrix: ShapeMatrix,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_COLUMNS]; BOARD_ROWS],
            active: None,
            next: ShapeKind::O,
            next_matrix: shape_for(ShapeKind::O),
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: crate::scoring::drop_interval_ms(START_LEVEL),
            phase: GamePhase::Running,
        }
    }
}
