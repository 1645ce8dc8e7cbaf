//! Piece module - the active falling tetromino
//!
//! A piece is a shape matrix anchored at a grid position `(gx, gy)`: matrix
//! cell `(c, r)` lives at grid cell `(gx + c, gy + r)`. Every move and rotation
//! is evaluated on the candidate cells first and committed only when legal, so
//! a rejected operation leaves the piece exactly as it was.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::collision::{
    horizontal_collision, outside_columns, outside_rows, overlaps_settled, vertical_collision,
    Contact,
};
use crate::shape::Shape;
use crate::types::PieceKind;

/// A single occupied cell with its owning kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub gx: i8,
    pub gy: i8,
    pub kind: PieceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    gx: i8,
    gy: i8,
    settled: bool,
    game_over: bool,
    inert: bool,
}

impl Piece {
    /// Spawn a piece at its kind's spawn column on row 0.
    ///
    /// A spawn that collides vertically is still created, flagged game over.
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let mut piece = Self {
            kind,
            shape: Shape::of(kind),
            gx: kind.spawn_column(),
            gy: 0,
            settled: false,
            game_over: false,
            inert: false,
        };
        if !vertical_collision(board, &piece.cells()).is_clear() {
            piece.game_over = true;
        }
        piece
    }

    /// A display-only piece: anchored at the origin, rotated clockwise by
    /// `quarter_turns`, and never moved or collision-checked.
    pub fn inert(kind: PieceKind, quarter_turns: u8) -> Self {
        Self {
            kind,
            shape: Shape::of(kind).rotated(quarter_turns),
            gx: 0,
            gy: 0,
            settled: false,
            game_over: false,
            inert: true,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> (i8, i8) {
        (self.gx, self.gy)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Absolute occupied cells, row-major within the shape
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        Self::cells_of(&self.shape, self.gx, self.gy)
    }

    pub fn blocks(&self) -> ArrayVec<Block, 4> {
        self.cells()
            .into_iter()
            .map(|(gx, gy)| Block {
                gx,
                gy,
                kind: self.kind,
            })
            .collect()
    }

    fn cells_of(shape: &Shape, gx: i8, gy: i8) -> ArrayVec<(i8, i8), 4> {
        shape
            .cells()
            .into_iter()
            .take(4)
            .map(|(c, r)| (gx.saturating_add(c), gy.saturating_add(r)))
            .collect()
    }

    /// Translate by `(dx, dy)`, x first and then y, each axis checked on its own.
    ///
    /// A horizontal collision reverts the x step. A vertical collision reverts
    /// the y step, and landing also marks the piece settled. Returns true when
    /// every requested axis moved.
    pub fn move_by(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        if self.inert {
            return false;
        }

        let mut moved = true;

        if dx != 0 {
            let candidate = Self::cells_of(&self.shape, self.gx + dx, self.gy);
            if horizontal_collision(board, &candidate) {
                moved = false;
            } else {
                self.gx += dx;
            }
        }

        if dy != 0 {
            let candidate = Self::cells_of(&self.shape, self.gx, self.gy + dy);
            match vertical_collision(board, &candidate) {
                Contact::Clear => self.gy += dy,
                Contact::Blocked => moved = false,
                Contact::Landed => {
                    self.settled = true;
                    moved = false;
                }
            }
        }

        moved
    }

    /// Rotate clockwise a quarter turn, or a half turn when `half_turn` is set.
    ///
    /// No wall kicks: a rotation that leaves the grid or overlaps a settled
    /// block is rejected in place and returns false.
    pub fn rotate(&mut self, half_turn: bool, board: &Board) -> bool {
        if self.inert {
            return false;
        }

        let rotated = self.shape.rotated(if half_turn { 2 } else { 1 });
        let candidate = Self::cells_of(&rotated, self.gx, self.gy);
        if outside_columns(board, &candidate)
            || overlaps_settled(board, &candidate)
            || outside_rows(board, &candidate)
        {
            return false;
        }

        self.shape = rotated;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_GRID_SIDE;

    fn empty() -> Board {
        Board::new(10, 20)
    }

    #[test]
    fn test_spawn_positions() {
        let board = empty();
        let t = Piece::spawn(PieceKind::T, &board);
        assert_eq!(t.position(), (3, 0));
        assert_eq!(t.cells().as_slice(), &[(4, 0), (3, 1), (4, 1), (5, 1)]);

        let i = Piece::spawn(PieceKind::I, &board);
        assert_eq!(i.cells().as_slice(), &[(2, 1), (3, 1), (4, 1), (5, 1)]);
        assert!(!i.is_game_over());
    }

    #[test]
    fn test_spawn_onto_settled_block_is_game_over() {
        let mut board = empty();
        board.set(4, 1, Some(PieceKind::Z));
        let piece = Piece::spawn(PieceKind::T, &board);
        assert!(piece.is_game_over());
        // The piece still exists at its spawn position.
        assert_eq!(piece.position(), (3, 0));
    }

    #[test]
    fn test_move_left_right_and_wall() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::O, &board);
        assert!(p.move_by(-1, 0, &board));
        assert_eq!(p.position(), (2, 0));
        for _ in 0..5 {
            p.move_by(-1, 0, &board);
        }
        assert_eq!(p.position(), (0, 0));
        assert!(!p.move_by(-1, 0, &board));
        assert_eq!(p.position(), (0, 0));
        assert!(!p.is_settled());
    }

    #[test]
    fn test_horizontal_block_never_settles() {
        let mut board = empty();
        board.set(5, 0, Some(PieceKind::I));
        let mut p = Piece::spawn(PieceKind::O, &board);
        assert!(!p.move_by(1, 0, &board));
        assert_eq!(p.position(), (3, 0));
        assert!(!p.is_settled());
    }

    #[test]
    fn test_floor_contact_settles_and_reverts() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::O, &board);
        for _ in 0..18 {
            assert!(p.move_by(0, 1, &board));
        }
        assert_eq!(p.position(), (3, 18));
        let before = p.cells();
        assert!(!p.move_by(0, 1, &board));
        assert!(p.is_settled());
        assert_eq!(p.cells(), before);
    }

    #[test]
    fn test_landing_on_stack_settles() {
        let mut board = empty();
        board.set(3, 5, Some(PieceKind::L));
        let mut p = Piece::spawn(PieceKind::O, &board);
        for _ in 0..3 {
            assert!(p.move_by(0, 1, &board));
        }
        assert!(!p.move_by(0, 1, &board));
        assert!(p.is_settled());
        assert_eq!(p.position(), (3, 3));
    }

    #[test]
    fn test_diagonal_move_checks_axes_independently() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::O, &board);
        for _ in 0..5 {
            p.move_by(1, 0, &board);
        }
        assert_eq!(p.position(), (8, 0));
        // x is blocked by the wall, y still applies.
        assert!(!p.move_by(1, 1, &board));
        assert_eq!(p.position(), (8, 1));
    }

    #[test]
    fn test_rotate_succeeds_in_open_space() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::T, &board);
        assert!(p.rotate(false, &board));
        assert_eq!(p.shape(), &Shape::of(PieceKind::T).rotated(1));
        assert!(p.rotate(true, &board));
        assert_eq!(p.shape(), &Shape::of(PieceKind::T).rotated(3));
    }

    #[test]
    fn test_rotate_against_wall_is_rejected_unchanged() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::I, &board);
        assert!(p.rotate(false, &board));
        // Vertical I occupies matrix column 2; push it flush to the right wall.
        while p.move_by(1, 0, &board) {}
        let before = p;
        assert!(!p.rotate(false, &board));
        assert_eq!(p, before);
    }

    #[test]
    fn test_rotate_into_settled_block_is_rejected() {
        let mut board = empty();
        board.set(4, 2, Some(PieceKind::S));
        let mut p = Piece::spawn(PieceKind::T, &board);
        let before = p;
        // Quarter turn would occupy (4, 2).
        assert!(!p.rotate(false, &board));
        assert_eq!(p, before);
    }

    #[test]
    fn test_rotate_below_floor_is_rejected() {
        let board = empty();
        let mut p = Piece::spawn(PieceKind::I, &board);
        for _ in 0..18 {
            p.move_by(0, 1, &board);
        }
        assert_eq!(p.cells()[0].1, 19);
        assert!(!p.rotate(false, &board));
    }

    #[test]
    fn test_rotate_at_floor_of_tallest_grid_is_rejected() {
        let board = Board::new(10, MAX_GRID_SIDE);
        let mut p = Piece::spawn(PieceKind::I, &board);
        while p.move_by(0, 1, &board) {}
        assert!(p.is_settled());
        assert_eq!(p.cells()[0].1, MAX_GRID_SIDE as i8 - 1);
        let before = p;
        assert!(!p.rotate(false, &board));
        assert!(!p.rotate(true, &board));
        assert_eq!(p, before);
    }

    #[test]
    fn test_rotate_at_right_wall_of_widest_grid_is_rejected() {
        let board = Board::new(MAX_GRID_SIDE, 20);
        let mut p = Piece::spawn(PieceKind::I, &board);
        assert!(p.rotate(false, &board));
        while p.move_by(1, 0, &board) {}
        assert_eq!(p.cells()[0].0, MAX_GRID_SIDE as i8 - 1);
        let before = p;
        assert!(!p.rotate(false, &board));
        assert_eq!(p, before);
    }

    #[test]
    fn test_inert_piece_ignores_moves() {
        let board = empty();
        let mut p = Piece::inert(PieceKind::J, 2);
        assert!(p.is_inert());
        assert_eq!(p.shape(), &Shape::of(PieceKind::J).rotated(2));
        assert!(!p.move_by(1, 0, &board));
        assert!(!p.rotate(false, &board));
        assert_eq!(p.position(), (0, 0));
    }

    #[test]
    fn test_blocks_carry_kind() {
        let board = empty();
        let p = Piece::spawn(PieceKind::S, &board);
        let blocks = p.blocks();
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.kind == PieceKind::S));
    }
}
