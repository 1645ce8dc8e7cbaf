//! Board module - the settled field
//!
//! Every block that has come to rest lives here, indexed by (column, row) in a
//! flat row-major occupancy array. The active piece is never stored on the
//! board; it joins only when it settles.
//!
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in
//! `0..height` (top to bottom).

use crate::types::{Cell, PieceKind};

/// The settled field - `width` columns x `height` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and holding a settled block
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Number of settled blocks in row `y`
    pub fn row_count(&self, y: usize) -> usize {
        self.row(y)
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .unwrap_or(0)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row_count(y) == self.width as usize
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Remove row `y` and drop every row above it by one.
    ///
    /// The top row comes back empty. Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;

        // Walk upward so each row is copied before it is overwritten.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }

        true
    }

    /// Add blocks for the given absolute cells.
    ///
    /// Cells outside the grid are dropped; the return value counts the ones
    /// that were stored.
    pub fn settle(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> usize {
        cells
            .iter()
            .filter(|&&(x, y)| self.set(x, y, Some(kind)))
            .count()
    }

    /// Total settled blocks
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every settled block as (x, y, kind)
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|kind| ((i % width) as i8, (i / width) as i8, kind))
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty; a piece letter (`I J L O S T Z`) is a block of that kind;
    /// any other character is a block of kind `I`. Short rows are padded empty.
    pub fn from_rows(width: u8, height: u8, rows: &[&str]) -> Self {
        let mut board = Self::new(width, height);
        for (y, line) in rows.iter().take(height as usize).enumerate() {
            for (x, ch) in line.chars().take(width as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set(x as i8, y as i8, Some(kind));
            }
        }
        board
    }
}
