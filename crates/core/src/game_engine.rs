//! Game engine module - owns and advances a game session
//!
//! This module ties together the board, the falling piece, the shape generator
//! and scoring. It handles movement, rotation with wall kicks, gravity timing,
//! locking, line clears and the Running/Paused/GameOver lifecycle.
//!
//! Gameplay commands are silently ignored unless the session is Running.

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;
use crate::rng::ShapeGenerator;
use crate::scoring::{apply_line_clear, drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::shapes::shape_for;
use crate::types::*;

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Piece,
    next: ShapeKind,
    generator: ShapeGenerator,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time accumulated toward the next gravity step.
    drop_counter_ms: u32,
    phase: GamePhase,
    /// Last lock event (consumed by the UI).
    last_event: Option<LockEvent>,
}

impl GameEngine {
    /// Create a new game with uniformly random shapes from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_generator(ShapeGenerator::random(seed))
    }

    /// Create a new game on an empty standard board
    pub fn with_generator(generator: ShapeGenerator) -> Self {
        Self::with_board(Board::new(BOARD_ROWS, BOARD_COLUMNS), generator)
    }

    /// Create a game on a prepared board.
    ///
    /// The first piece spawns immediately; if it already collides the session
    /// starts in [`GamePhase::GameOver`].
    pub fn with_board(board: Board, mut generator: ShapeGenerator) -> Self {
        let first = generator.draw();
        let mut engine = Self {
            active: Piece::spawn(first, board.columns()),
            board,
            next: first,
            generator,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
            drop_counter_ms: 0,
            phase: GamePhase::Running,
            last_event: None,
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> ShapeKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Seed of the random shape generator, if any
    pub fn seed(&self) -> Option<u64> {
        self.generator.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.next_matrix = shape_for(self.next);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the held next shape to the active piece and draw a new next.
    ///
    /// Returns false (and ends the game) if the new piece collides where it spawns.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.next;
        self.next = self.generator.draw();
        self.active = Piece::spawn(kind, self.board.columns());

        if collides(&self.board, &self.active) {
            self.phase = GamePhase::GameOver;
            info!(score = self.score, level = self.level, "game over");
            return false;
        }

        true
    }

    /// Shift the piece one column left (`-1`) or right (`+1`).
    pub fn move_horizontal(&mut self, dx: i32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.active.x += dx;
        if collides(&self.board, &self.active) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    /// Drop the piece one row, locking it in place if it cannot fall.
    ///
    /// Returns true if the piece moved down, false if it locked (or the command
    /// was ignored). Either way the gravity accumulator restarts.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.drop_counter_ms = 0;
        self.active.y += 1;
        if collides(&self.board, &self.active) {
            self.active.y -= 1;
            self.lock_piece();
            return false;
        }
        true
    }

    /// Drop the piece to the lowest valid row and lock it.
    ///
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let start_y = self.active.y;
        while !collides(&self.board, &self.active) {
            self.active.y += 1;
        }
        self.active.y -= 1;

        let distance = (self.active.y - start_y).max(0) as u32;
        self.lock_piece();
        distance
    }

    /// Rotate the piece, kicking it sideways if the rotation collides.
    ///
    /// Kicks are tried at offsets +1, -2, +3, -4, ... applied cumulatively to x.
    /// The attempt is abandoned (and fully rolled back) once the next offset is
    /// greater than the matrix width.
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if !self.is_running() {
            return false;
        }

        let original_x = self.active.x;
        let width = self.active.width() as i32;
        let mut offset: i32 = 1;

        self.active.rotate(direction);
        while collides(&self.board, &self.active) {
            self.active.x += offset;
            offset = -(offset + offset.signum());
            // Signed comparison: negative offsets never end the search here.
            if offset > width {
                self.active.rotate(direction.opposite());
                self.active.x = original_x;
                return false;
            }
        }
        true
    }

    /// Advance gravity by `elapsed_ms`. Returns true if a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Merge the piece, clear lines, update score/level, then spawn the next piece.
    fn lock_piece(&mut self) {
        self.board.merge_piece(&self.active);
        let cleared = self.board.clear_full_lines();

        let result = apply_line_clear(self.score, self.level, cleared);
        self.score = result.score;
        self.lines = self.lines.saturating_add(cleared as u32);
        if result.leveled_up {
            self.level = result.level;
            self.drop_interval_ms = drop_interval_ms(self.level);
            info!(
                level = self.level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        self.drop_counter_ms = 0;
        debug!(
            kind = self.active.kind.letter(),
            x = self.active.x,
            y = self.active.y,
            lines = cleared,
            points = result.points,
            "piece locked"
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points: result.points,
            leveled_up: result.leveled_up,
            game_over: !spawned,
        });
    }

    /// Running → Paused. Returns false if the session was not running.
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        info!("paused");
        true
    }

    /// Paused → Running. Returns false if the session was not paused.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        info!("resumed");
        true
    }

    /// Flip between Running and Paused. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::GameOver => false,
        }
    }

    /// Start over: empty board, score 0, level 1, fresh active and next pieces.
    pub fn restart(&mut self) {
        self.board.reset();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(START_LEVEL);
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.phase = GamePhase::Running;
        self.next = self.generator.draw();
        self.spawn_piece();
        info!("restarted");
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => {
                if !self.is_running() {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if !self.is_running() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDirection::CounterClockwise),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn o_engine() -> GameEngine {
        GameEngine::with_generator(ShapeGenerator::sequence([ShapeKind::O]))
    }

    #[test]
    fn test_new_game_state() {
        let engine = GameEngine::new(12345);

        assert_eq!(engine.phase, GamePhase::Running);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.level, 1);
        assert_eq!(engine.lines, 0);
        assert_eq!(engine.drop_interval_ms, 1000);
        assert_eq!(engine.drop_counter_ms, 0);
        assert_eq!(engine.active.y, 0);
        assert!(engine.last_event.is_none());
    }

    #[test]
    fn test_spawn_takes_next() {
        let mut engine = GameEngine::with_generator(ShapeGenerator::sequence([
            ShapeKind::T,
            ShapeKind::I,
            ShapeKind::Z,
        ]));
        assert_eq!(engine.active.kind, ShapeKind::T);
        assert_eq!(engine.next, ShapeKind::I);

        engine.hard_drop();
        assert_eq!(engine.active.kind, ShapeKind::I);
        assert_eq!(engine.next, ShapeKind::Z);
        assert_eq!(engine.active.x, 3);
        assert_eq!(engine.active.y, 0);
    }

    #[test]
    fn test_move_reverts_on_collision() {
        let mut engine = o_engine();
        for _ in 0..10 {
            engine.move_horizontal(-1);
        }
        assert_eq!(engine.active.x, 0);
        assert!(!engine.move_horizontal(-1));
        assert_eq!(engine.active.x, 0);
    }

    #[test]
    fn test_soft_drop_advances_then_locks() {
        let mut engine = o_engine();
        assert!(engine.soft_drop());
        assert_eq!(engine.active.y, 1);

        engine.active.y = 18;
        assert!(!engine.soft_drop());
        assert_eq!(engine.board.get(4, 18), Some(6));
        assert_eq!(engine.board.get(5, 19), Some(6));
        assert_eq!(engine.active.y, 0);
    }

    #[test]
    fn test_hard_drop_distance() {
        let mut engine = o_engine();
        assert_eq!(engine.hard_drop(), 18);
        assert_eq!(engine.board.filled_rows(), 2);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut engine = o_engine();
        assert!(!engine.tick(500));
        assert!(!engine.tick(500));
        assert_eq!(engine.drop_counter_ms, 1000);
        assert_eq!(engine.active.y, 0);

        // Strictly greater than the interval triggers the drop.
        assert!(engine.tick(1));
        assert_eq!(engine.active.y, 1);
        assert_eq!(engine.drop_counter_ms, 0);
    }

    #[test]
    fn test_rotation_kicks_off_right_wall() {
        let mut engine = GameEngine::with_generator(ShapeGenerator::sequence([ShapeKind::I]));
        // Vertical I sits in column x+2; push it against the right wall.
        engine.rotate(RotationDirection::Clockwise);
        while engine.move_horizontal(1) {}
        assert_eq!(engine.active.x + 2, 9);

        // Back to horizontal needs four columns: kicked left.
        assert!(engine.rotate(RotationDirection::CounterClockwise));
        assert!(!collides(&engine.board, &engine.active));
        assert!(engine.active.x + 3 <= 9);
    }

    #[test]
    fn test_rotation_rolls_back_when_no_kick_fits() {
        let mut board = Board::new(BOARD_ROWS, BOARD_COLUMNS);
        // Box the T piece in so that no rotation/kick combination fits.
        for y in 1..BOARD_ROWS as i32 {
            for x in 0..BOARD_COLUMNS as i32 {
                if !(y == 1 && (4..=6).contains(&x)) {
                    board.set(x, y, 1);
                }
            }
        }
        let mut engine =
            GameEngine::with_board(board, ShapeGenerator::sequence([ShapeKind::T]));
        assert!(engine.is_running());

        let before = engine.active;
        assert!(!engine.rotate(RotationDirection::Clockwise));
        assert_eq!(engine.active, before);
    }

    #[test]
    fn test_commands_ignored_while_paused() {
        let mut engine = o_engine();
        assert!(engine.pause());
        let before = engine.active;

        assert!(!engine.move_horizontal(1));
        assert!(!engine.soft_drop());
        assert_eq!(engine.hard_drop(), 0);
        assert!(!engine.rotate(RotationDirection::Clockwise));
        assert!(!engine.tick(5000));
        assert_eq!(engine.active, before);
        assert_eq!(engine.board.filled_rows(), 0);

        assert!(engine.resume());
        assert!(engine.is_running());
    }

    #[test]
    fn test_toggle_pause_ignored_after_game_over() {
        let mut engine = o_engine();
        engine.phase = GamePhase::GameOver;
        assert!(!engine.toggle_pause());
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_last_event_set_on_hard_drop() {
        let mut engine = o_engine();
        assert!(engine.apply_action(GameAction::HardDrop));
        let ev = engine.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert_eq!(ev.points, 0);
        assert!(!ev.game_over);
        assert!(engine.take_last_event().is_none());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut engine = o_engine();
        engine.hard_drop();
        engine.score = 2500;
        engine.level = 3;
        engine.drop_interval_ms = 800;
        engine.drop_counter_ms = 40;
        engine.phase = GamePhase::GameOver;

        assert!(engine.apply_action(GameAction::Restart));
        assert_eq!(engine.board.filled_rows(), 0);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.level, 1);
        assert_eq!(engine.drop_interval_ms, 1000);
        assert_eq!(engine.drop_counter_ms, 0);
        assert!(engine.is_running());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut engine = o_engine();
        engine.hard_drop();
        let snap = engine.snapshot();
        assert_eq!(snap.board[19][4], 6);
        assert_eq!(snap.board[18][5], 6);
        assert_eq!(snap.active.unwrap().kind, ShapeKind::O);
        assert_eq!(snap.next, ShapeKind::O);
        assert_eq!(snap.level, 1);
        assert!(snap.playable());
    }
}
