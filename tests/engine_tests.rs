//! Game engine scenarios: locking, line clears, leveling, wall kicks and game over

use blockfall::core::{drop_interval_ms, shape_for, Board, GameEngine, ShapeGenerator};
use blockfall::types::{GameAction, GamePhase, RotationDirection, ShapeKind};

fn engine_with(board: Board, kinds: &[ShapeKind]) -> GameEngine {
    GameEngine::with_board(board, ShapeGenerator::sequence(kinds.to_vec()))
}

fn board_with(cells: &[(i32, i32)], value: u8) -> Board {
    let mut board = Board::new(20, 10);
    for &(x, y) in cells {
        board.set(x, y, value);
    }
    board
}

fn drop_rows(engine: &mut GameEngine, rows: usize) {
    for _ in 0..rows {
        assert!(engine.soft_drop());
    }
}

#[test]
fn test_o_hard_drop_lands_on_floor() {
    let mut engine = engine_with(Board::new(20, 10), &[ShapeKind::O]);
    assert_eq!(engine.active().x, 4);

    assert_eq!(engine.hard_drop(), 18);

    let board = engine.board();
    for y in [18, 19] {
        assert_eq!(board.row(y), &[0, 0, 0, 0, 6, 6, 0, 0, 0, 0]);
    }
    assert_eq!(board.filled_rows(), 2);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.level(), 1);
}

#[test]
fn test_double_clear_scores_400_and_shifts_rows() {
    let mut cells = Vec::new();
    for y in [18, 19] {
        for x in (0..10).filter(|x| !(4..=5).contains(x)) {
            cells.push((x, y));
        }
    }
    cells.push((0, 17));
    let mut engine = engine_with(board_with(&cells, 1), &[ShapeKind::O]);
    assert_eq!(engine.board().filled_rows(), 3);

    engine.apply_action(GameAction::HardDrop);

    let event = engine.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 2);
    assert_eq!(event.points, 400);
    assert!(!event.leveled_up);
    assert!(!event.game_over);

    assert_eq!(engine.score(), 400);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.lines(), 2);
    assert_eq!(engine.board().filled_rows(), 1);
    assert_eq!(engine.board().get(0, 19), Some(1));
    assert_eq!(engine.board().row(0), &[0; 10]);
    assert_eq!(engine.board().row(1), &[0; 10]);
}

#[test]
fn test_tetris_levels_up_once_and_speeds_up() {
    let mut cells = Vec::new();
    for y in 16..20 {
        for x in 1..10 {
            cells.push((x, y));
        }
    }
    let mut engine = engine_with(board_with(&cells, 2), &[ShapeKind::I]);

    assert!(engine.rotate(RotationDirection::Clockwise));
    for _ in 0..5 {
        assert!(engine.move_horizontal(-1));
    }
    assert!(!engine.move_horizontal(-1));
    assert_eq!(engine.active().x, -2);

    engine.hard_drop();

    assert_eq!(engine.lines(), 4);
    assert_eq!(engine.score(), 1600);
    assert_eq!(engine.level(), 2);
    assert_eq!(engine.drop_interval_ms(), 900);
    assert!(engine.take_last_event().unwrap().leveled_up);
    assert_eq!(engine.board().filled_rows(), 0);
}

#[test]
fn test_drop_interval_floors_at_level_ten() {
    assert_eq!(drop_interval_ms(1), 1000);
    assert_eq!(drop_interval_ms(2), 900);
    assert_eq!(drop_interval_ms(9), 200);
    assert_eq!(drop_interval_ms(10), 100);
    assert_eq!(drop_interval_ms(25), 100);
}

#[test]
fn test_gravity_needs_strictly_more_than_interval() {
    let mut engine = engine_with(Board::new(20, 10), &[ShapeKind::T]);

    assert!(!engine.tick(1000));
    assert_eq!(engine.active().y, 0);
    assert!(engine.tick(1));
    assert_eq!(engine.active().y, 1);
    assert_eq!(engine.drop_counter_ms(), 0);
}

#[test]
fn test_game_over_when_spawn_is_blocked_at_start() {
    let board = board_with(&[(4, 0)], 3);
    let engine = engine_with(board.clone(), &[ShapeKind::O]);

    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(engine.board(), &board);
}

#[test]
fn test_game_over_after_lock_fills_spawn_area() {
    let mut cells = Vec::new();
    for y in 2..20 {
        cells.push((4, y));
        cells.push((5, y));
    }
    let mut engine = engine_with(board_with(&cells, 1), &[ShapeKind::O]);
    assert!(engine.is_running());

    assert_eq!(engine.hard_drop(), 0);

    let event = engine.take_last_event().unwrap();
    assert!(event.game_over);
    assert_eq!(event.lines_cleared, 0);
    assert!(engine.is_game_over());

    // The blocked spawn is not merged.
    let board_after = engine.board().clone();
    assert_eq!(board_after.get(4, 0), Some(6));
    assert_eq!(board_after.get(5, 1), Some(6));
    assert_eq!(board_after.get(4, 2), Some(1));

    // Nothing but a restart moves it from here.
    assert!(!engine.apply_action(GameAction::MoveLeft));
    assert!(!engine.apply_action(GameAction::HardDrop));
    assert!(!engine.apply_action(GameAction::Pause));
    assert!(!engine.tick(5000));
    assert_eq!(engine.board(), &board_after);

    engine.apply_action(GameAction::Restart);
    assert!(engine.is_running());
    assert_eq!(engine.board().filled_rows(), 0);
    assert_eq!(engine.score(), 0);
}

/// A T dropped to row 5 with obstacles on row 7 under the stems of the
/// rotated positions `x` for every `x` in `blocked`.
fn t_over_obstacles(blocked: &[i32]) -> GameEngine {
    let cells: Vec<(i32, i32)> = blocked.iter().map(|&x| (x + 1, 7)).collect();
    let mut engine = engine_with(board_with(&cells, 5), &[ShapeKind::T]);
    drop_rows(&mut engine, 5);
    assert_eq!((engine.active().x, engine.active().y), (4, 5));
    engine
}

#[test]
fn test_rotation_kicks_one_left() {
    let mut engine = t_over_obstacles(&[4, 5]);
    assert!(engine.rotate(RotationDirection::Clockwise));
    assert_eq!(engine.active().x, 3);
}

#[test]
fn test_rotation_kicks_two_right() {
    let mut engine = t_over_obstacles(&[3, 4, 5]);
    assert!(engine.rotate(RotationDirection::Clockwise));
    assert_eq!(engine.active().x, 6);
}

#[test]
fn test_rotation_gives_up_before_two_left() {
    // x = 2 would fit, but the search ends once the offset passes the width.
    let mut engine = t_over_obstacles(&[3, 4, 5, 6]);
    assert!(!engine.rotate(RotationDirection::Clockwise));
    assert_eq!(engine.active().x, 4);
    assert_eq!(engine.active().matrix, shape_for(ShapeKind::T));
}

#[test]
fn test_pause_freezes_gameplay() {
    let mut engine = engine_with(Board::new(20, 10), &[ShapeKind::L]);
    assert!(engine.apply_action(GameAction::Pause));
    assert!(engine.is_paused());

    let before = *engine.active();
    assert!(!engine.apply_action(GameAction::MoveRight));
    assert!(!engine.apply_action(GameAction::RotateCw));
    assert!(!engine.apply_action(GameAction::SoftDrop));
    assert!(!engine.tick(10_000));
    assert_eq!(*engine.active(), before);

    assert!(engine.apply_action(GameAction::Pause));
    assert!(engine.is_running());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameEngine::new(42);
    let mut b = GameEngine::new(42);
    for _ in 0..20 {
        assert_eq!(a.active().kind, b.active().kind);
        assert_eq!(a.next(), b.next());
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.seed(), Some(42));
}
