//! Board module - manages the game grid
//!
//! The board is a `rows` x `columns` grid of cell values stored as a flat,
//! row-major vector with its dimensions carried alongside.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom.
//!
//! Probing outside the grid is not symmetric: the space above row 0 is open
//! (pieces spawn and rotate partly above the top), while the side walls and the
//! floor are solid. See [`Board::probe`].

use crate::piece::Piece;
use crate::types::{Cell, EMPTY};

/// Result of probing a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Inside the grid and empty, or anywhere above the top row
    Empty,
    /// Inside the grid and holding a value
    Filled(Cell),
    /// Beyond a side wall or below the floor
    Blocked,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY; rows * columns],
        }
    }

    /// Build a board from explicit rows, top row first
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let columns = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == columns),
            "all rows must have the same width"
        );
        Self {
            rows: rows.len(),
            columns,
            cells: rows.concat(),
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.columns as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * self.columns + (x as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Classify a position for collision purposes.
    ///
    /// A column outside `[0, columns)` or a row at or below `rows` is
    /// [`Probe::Blocked`]; any row above the top (`y < 0`) inside the side walls
    /// is [`Probe::Empty`].
    pub fn probe(&self, x: i32, y: i32) -> Probe {
        if x < 0 || x >= self.columns as i32 || y >= self.rows as i32 {
            return Probe::Blocked;
        }
        if y < 0 {
            return Probe::Empty;
        }
        match self.get(x, y) {
            Some(EMPTY) => Probe::Empty,
            Some(value) => Probe::Filled(value),
            None => Probe::Blocked,
        }
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Number of rows holding at least one filled cell
    pub fn filled_rows(&self) -> usize {
        (0..self.rows)
            .filter(|&y| self.row(y).iter().any(|&cell| cell != EMPTY))
            .count()
    }

    /// Write every non-empty cell of the piece into the board at its offset.
    ///
    /// The caller must have checked the piece does not collide. Cells above the
    /// top row have nowhere to go and are dropped.
    pub fn merge_piece(&mut self, piece: &Piece) {
        for (x, y, value) in piece.board_cells() {
            self.set(x, y, value);
        }
    }

    /// Remove a row, shifting everything above it down by one and opening an
    /// empty row at the top.
    fn remove_row(&mut self, y: usize) {
        let width = self.columns;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(EMPTY);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same index is checked again,
    /// because the row that slid into it may be full as well.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.rows;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a fixed-size grid, clipping to whichever is smaller.
    pub fn write_grid<const C: usize, const R: usize>(&self, out: &mut [[Cell; C]; R]) {
        for (y, out_row) in out.iter_mut().enumerate() {
            for (x, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = if y < self.rows && x < self.columns {
                    self.cells[y * self.columns + x]
                } else {
                    EMPTY
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLUMNS)
    }
}
