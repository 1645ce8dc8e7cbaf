//! Shape module - square occupancy matrices for the seven tetrominoes
//!
//! A shape is an immutable `n x n` boolean matrix (`n` is 2, 3 or 4). Rotation
//! never mutates a shape in place; it returns a fresh matrix.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of an occupied cell relative to the shape origin: (column, row)
pub type CellOffset = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Canonical spawn-orientation shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&["....", "####", "....", "...."]),
            PieceKind::J => Self::from_rows(&["#..", "###", "..."]),
            PieceKind::L => Self::from_rows(&["..#", "###", "..."]),
            PieceKind::O => Self::from_rows(&["##", "##"]),
            PieceKind::S => Self::from_rows(&[".##", "##.", "..."]),
            PieceKind::T => Self::from_rows(&[".#.", "###", "..."]),
            PieceKind::Z => Self::from_rows(&["##.", ".##", "..."]),
        }
    }

    /// Build a shape from text rows, `#` marking an occupied cell.
    ///
    /// Rows beyond [`MAX_SHAPE_SIZE`] are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len().min(MAX_SHAPE_SIZE);
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, line) in rows.iter().take(size).enumerate() {
            for (c, ch) in line.chars().take(size).enumerate() {
                grid[r][c] = ch == '#';
            }
        }
        Self {
            size: size as u8,
            rows: grid,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.size as usize && row < self.size as usize && self.rows[row][col]
    }

    /// Rotate clockwise by `quarter_turns` quarter turns (any count, taken mod 4)
    pub fn rotated(&self, quarter_turns: u8) -> Self {
        let mut out = *self;
        for _ in 0..quarter_turns % 4 {
            out = out.rotated_cw_once();
        }
        out
    }

    /// Cell (row r, col c) moves to (row c, col n - 1 - r).
    fn rotated_cw_once(&self) -> Self {
        let n = self.size as usize;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..n {
            for c in 0..n {
                grid[c][n - 1 - r] = self.rows[r][c];
            }
        }
        Self {
            size: self.size,
            rows: grid,
        }
    }

    /// Occupied cells in row-major order, as (column, row) offsets
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        let n = self.size as usize;
        let mut out = ArrayVec::new();
        for r in 0..n {
            for c in 0..n {
                if self.rows[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    /// Bounding box of the occupied cells: (min_col, min_row, width, height)
    pub fn bounds(&self) -> Option<(i8, i8, u8, u8)> {
        let cells = self.cells();
        let min_c = cells.iter().map(|&(c, _)| c).min()?;
        let max_c = cells.iter().map(|&(c, _)| c).max()?;
        let min_r = cells.iter().map(|&(_, r)| r).min()?;
        let max_r = cells.iter().map(|&(_, r)| r).max()?;
        Some((
            min_c,
            min_r,
            (max_c - min_c + 1) as u8,
            (max_r - min_r + 1) as u8,
        ))
    }
}
