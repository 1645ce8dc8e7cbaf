use crate::piece::Piece;
use crate::types::{Cell, GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Absolute grid cells, row-major within the shape
    pub cells: [(i8, i8); 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut cells = [(0i8, 0i8); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.cells()) {
            *slot = cell;
        }
        Self {
            kind: piece.kind(),
            cells,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled field, row-major (y * width + x)
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    /// Spawn counts indexed by [`PieceKind::index`]
    pub stats: [u32; 7],
    pub score: u32,
    /// Higher of the stored high score and the running score
    pub high_score: u32,
    pub level: u32,
    pub rows_cleared: u32,
    pub total_rows_cleared: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Settled cell at (x, y); None when empty or out of range
    pub fn settled_at(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    /// Settled or active kind at (x, y)
    pub fn cell_at(&self, x: u8, y: u8) -> Cell {
        if let Some(active) = &self.active {
            if active
                .cells
                .iter()
                .any(|&(ax, ay)| ax as i16 == x as i16 && ay as i16 == y as i16)
            {
                return Some(active.kind);
            }
        }
        self.settled_at(x, y)
    }

    pub fn spawn_count(&self, kind: PieceKind) -> u32 {
        self.stats[kind.index()]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            next: PieceKind::I,
            stats: [0; 7],
            score: 0,
            high_score: 0,
            level: 0,
            rows_cleared: 0,
            total_rows_cleared: 0,
            status: GameStatus::Running,
        }
    }
}
