//! Piece module - square cell matrices and the falling piece
//!
//! A [`ShapeMatrix`] is a square grid (2x2, 3x3 or 4x4) of cell values with its
//! size stored alongside the data. Rotation is done in place by transposing and
//! then reversing either each row (clockwise) or the row order (counter-clockwise).

use arrayvec::ArrayVec;

use crate::shapes::shape_for;
use crate::types::{Cell, RotationDirection, ShapeKind, EMPTY};

/// Largest matrix used by the shape catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied cells of a matrix as `(x, y, value)` in local coordinates
pub type OccupiedCells = ArrayVec<(usize, usize, Cell), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square matrix of cell values, indexed `[y][x]` with row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from the top-left `size`x`size` block of `cells`.
    ///
    /// Cells outside that block must be empty.
    pub const fn new(size: usize, cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at local column `x`, row `y` (empty outside the matrix)
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.size || y >= self.size {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// One row of the matrix, trimmed to its size
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y][..self.size]
    }

    /// All non-empty cells, row by row
    pub fn occupied(&self) -> OccupiedCells {
        let mut out = ArrayVec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let value = self.cells[y][x];
                if value != EMPTY {
                    out.push((x, y, value));
                }
            }
        }
        out
    }

    /// Rotate 90° in place: transpose, then reverse rows (CW) or row order (CCW).
    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                let upper = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = upper;
            }
        }

        match direction {
            RotationDirection::Clockwise => {
                for row in &mut self.cells[..n] {
                    row[..n].reverse();
                }
            }
            RotationDirection::CounterClockwise => self.cells[..n].reverse(),
        }
    }
}

/// The falling piece: a private copy of a shape plus its board offset
///
/// `(x, y)` is where the matrix's top-left corner sits on the board. `y` may be
/// negative while the piece pokes out above the visible top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at an explicit position
    pub fn new(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            matrix: shape_for(kind),
            x,
            y,
        }
    }

    /// Create a piece at the spawn position for a board `columns` wide:
    /// top row, horizontally centered on the matrix width.
    pub fn spawn(kind: ShapeKind, columns: usize) -> Self {
        let matrix = shape_for(kind);
        let x = (columns / 2) as i32 - (matrix.size() / 2) as i32;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    /// Width of the piece matrix
    pub fn width(&self) -> usize {
        self.matrix.size()
    }

    /// Rotate the piece matrix in place. Position is left to the caller.
    pub fn rotate(&mut self, direction: RotationDirection) {
        self.matrix.rotate(direction);
    }

    /// Occupied cells in board coordinates as `(x, y, value)`
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.matrix
            .occupied()
            .into_iter()
            .map(move |(x, y, value)| (self.x + x as i32, self.y + y as i32, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_t_clockwise() {
        let mut m = shape_for(ShapeKind::T);
        m.rotate(RotationDirection::Clockwise);
        assert_eq!(m.row(0), &[0, 4, 0]);
        assert_eq!(m.row(1), &[0, 4, 4]);
        assert_eq!(m.row(2), &[0, 4, 0]);
    }

    #[test]
    fn test_rotate_t_counter_clockwise() {
        let mut m = shape_for(ShapeKind::T);
        m.rotate(RotationDirection::CounterClockwise);
        assert_eq!(m.row(0), &[0, 4, 0]);
        assert_eq!(m.row(1), &[4, 4, 0]);
        assert_eq!(m.row(2), &[0, 4, 0]);
    }

    #[test]
    fn test_rotation_leaves_padding_untouched() {
        let mut m = shape_for(ShapeKind::O);
        m.rotate(RotationDirection::Clockwise);
        assert_eq!(m.cells[0][2], EMPTY);
        assert_eq!(m.cells[2][0], EMPTY);
        assert_eq!(m, shape_for(ShapeKind::O));
    }

    #[test]
    fn test_occupied_counts_four_minos() {
        for kind in ShapeKind::ALL {
            assert_eq!(shape_for(kind).occupied().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::spawn(ShapeKind::O, 10).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::T, 10).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::I, 10).x, 3);
        assert_eq!(Piece::spawn(ShapeKind::I, 10).y, 0);
    }

    #[test]
    fn test_board_cells_are_offset() {
        let piece = Piece::new(ShapeKind::O, 2, -1);
        let cells: Vec<_> = piece.board_cells().collect();
        assert_eq!(cells, vec![(2, -1, 6), (3, -1, 6), (2, 0, 6), (3, 0, 6)]);
    }
}
