//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right:
//!
//! ```text
//! ┌ SHAPE COUNTS ┐ ┌ ROWS nnn ┐ ┌ HIGH/POINTS ┐
//! │ piece  nnn   │ ├──────────┤ ├ ON DECK ────┤
//! │ ...          │ │playfield │ ├ LEVEL ──────┤
//! ```

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind};

const BACKGROUND: Rgb = Rgb::new(16, 16, 16);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(252, 252, 252);
const STATS_TEXT: Rgb = Rgb::new(248, 56, 0);
const BORDER: Rgb = Rgb::new(164, 164, 255);

/// Outer width of the shape-count panel
const STATS_W: u16 = 20;
/// Outer width of the score, next-piece and level panels
const SIDE_W: u16 = 14;
/// Outer height of the rows header
const HEADER_H: u16 = 3;
const GAP: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Outer rectangle of a panel, border included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// Where every panel goes for a given grid and viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub stats: Rect,
    pub header: Rect,
    pub board: Rect,
    pub scores: Rect,
    pub next: Rect,
    pub level: Rect,
}

impl Layout {
    pub fn width(&self) -> u16 {
        self.scores.right().saturating_sub(self.stats.x)
    }

    pub fn height(&self) -> u16 {
        self.board.bottom().saturating_sub(self.header.y)
    }
}

/// Terminal renderer for the playfield and its panels.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Panel placement, centred in the viewport
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let board_w = snap.width as u16 * self.cell_w + 2;
        let board_h = snap.height as u16 * self.cell_h + 2;
        let total_w = STATS_W + GAP + board_w + GAP + SIDE_W;
        let total_h = HEADER_H + board_h;

        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(total_h) / 2;

        let stats = Rect::new(x0, y0, STATS_W, total_h);
        let header = Rect::new(stats.right() + GAP, y0, board_w, HEADER_H);
        let board = Rect::new(header.x, header.bottom(), board_w, board_h);
        let side_x = board.right() + GAP;
        let scores = Rect::new(side_x, y0, SIDE_W, 7);
        let next = Rect::new(side_x, scores.bottom() + GAP, SIDE_W, 6);
        let level = Rect::new(side_x, next.bottom() + GAP, SIDE_W, 4);

        Layout {
            stats,
            header,
            board,
            scores,
            next,
            level,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BACKGROUND).into_cell(' '));

        let layout = self.layout(snap, viewport);
        self.draw_stats_panel(fb, snap, layout.stats);
        self.draw_rows_header(fb, snap, layout.header);
        self.draw_playfield(fb, snap, layout.board);
        self.draw_scores_panel(fb, snap, layout.scores);
        self.draw_next_panel(fb, snap, layout.next);
        self.draw_level_panel(fb, snap, layout.level);

        match snap.status {
            GameStatus::Paused => self.draw_overlay_text(fb, layout.board, "PAUSED"),
            GameStatus::GameOver => self.draw_overlay_text(fb, layout.board, "GAME OVER"),
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn panel(&self, fb: &mut FrameBuffer, rect: Rect) {
        let inner = CellStyle::new(TEXT, PANEL_BG);
        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            rect.w.saturating_sub(2),
            rect.h.saturating_sub(2),
            ' ',
            inner,
        );
        fb.draw_box(rect.x, rect.y, rect.w, rect.h, CellStyle::new(BORDER, PANEL_BG));
    }

    fn label_style(&self) -> CellStyle {
        CellStyle::new(TEXT, PANEL_BG).bold()
    }

    fn value_style(&self) -> CellStyle {
        CellStyle::new(TEXT, PANEL_BG)
    }

    fn centered_str(&self, fb: &mut FrameBuffer, rect: Rect, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }

    fn block_style(&self, kind: PieceKind) -> CellStyle {
        CellStyle::new(Rgb::from_array(kind.color()), PANEL_BG).bold()
    }

    /// One grid cell at terminal position (px, py), `cell_w` columns wide
    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, kind: PieceKind) {
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', self.block_style(kind));
    }

    /// Draw a display-only piece with its bounding box's top-left at (x, y).
    fn draw_inert(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) {
        let Some((min_c, min_r, _, _)) = piece.shape().bounds() else {
            return;
        };
        for (c, r) in piece.cells() {
            let px = x + (c - min_c) as u16 * self.cell_w;
            let py = y + (r - min_r) as u16 * self.cell_h;
            self.draw_block(fb, px, py, piece.kind());
        }
    }

    fn draw_stats_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        self.centered_str(fb, rect, rect.y + 1, "SHAPE COUNTS", self.label_style());

        let first_y = rect.y + 3;
        let room = rect.bottom().saturating_sub(1).saturating_sub(first_y);
        let slot_h = (room / PieceKind::STATS_ORDER.len() as u16).clamp(1, 3);
        let count_style = CellStyle::new(STATS_TEXT, PANEL_BG).bold();

        for (i, kind) in PieceKind::STATS_ORDER.into_iter().enumerate() {
            let y = first_y + i as u16 * slot_h;
            let piece = Piece::inert(kind, 2);
            self.draw_inert(fb, &piece, rect.x + 3, y);
            fb.put_u32_padded(rect.x + 12, y, snap.spawn_count(kind), 3, count_style);
        }
    }

    fn draw_rows_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        // "ROWS nnn"
        let text_w = 5 + digit_count(snap.total_rows_cleared).max(3);
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        let y = rect.y + 1;
        fb.put_str(x, y, "ROWS ", self.label_style());
        fb.put_u32_padded(x + 5, y, snap.total_rows_cleared, 3, self.label_style());
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        let origin_x = rect.x + 1;
        let origin_y = rect.y + 1;

        let empty = CellStyle::new(Rgb::new(60, 60, 70), PANEL_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                let px = origin_x + x as u16 * self.cell_w;
                let py = origin_y + y as u16 * self.cell_h;
                match snap.cell_at(x, y) {
                    Some(kind) => self.draw_block(fb, px, py, kind),
                    None => fb.put_char(px, py, '·', empty),
                }
            }
        }
    }

    fn draw_scores_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        let x = rect.x + 2;
        fb.put_str(x, rect.y + 1, "HIGH", self.label_style());
        fb.put_u32_padded(x, rect.y + 2, snap.high_score, 6, self.value_style());
        fb.put_str(x, rect.y + 4, "POINTS", self.label_style());
        fb.put_u32(x, rect.y + 5, snap.score, self.value_style());
    }

    fn draw_next_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        self.centered_str(fb, rect, rect.y + 1, "ON DECK", self.label_style());

        let piece = Piece::inert(snap.next, 0);
        let (w, _) = snap.next.footprint();
        let piece_w = w as u16 * self.cell_w;
        let x = rect.x + rect.w.saturating_sub(piece_w) / 2;
        self.draw_inert(fb, &piece, x, rect.y + 3);
    }

    fn draw_level_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: Rect) {
        self.panel(fb, rect);
        self.centered_str(fb, rect, rect.y + 1, "LEVEL", self.label_style());
        let w = digit_count(snap.level);
        let x = rect.x + rect.w.saturating_sub(w) / 2;
        fb.put_u32(x, rect.y + 2, snap.level, self.value_style());
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, board: Rect, text: &str) {
        let mid_y = board.y.saturating_add(board.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        self.centered_str(fb, board, mid_y, text, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
