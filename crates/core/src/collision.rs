//! Collision detection between the falling piece and the board.

use crate::board::{Board, Probe};
use crate::piece::Piece;

/// Whether any occupied cell of `piece` lands on a wall, the floor, or a filled
/// board cell. Cells above the top row never collide on their own.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece
        .board_cells()
        .any(|(x, y, _)| board.probe(x, y) != Probe::Empty)
}
