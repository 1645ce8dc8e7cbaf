//! Collision module - legality tests for a candidate set of piece cells
//!
//! All functions are pure over the board and the candidate cells, so calling
//! them repeatedly with the same input gives the same answer.
//!
//! Horizontal and vertical checks differ on purpose:
//!
//! - A horizontal collision only blocks the move.
//! - A vertical collision either blocks the move or *lands* the piece: crossing
//!   the floor lands it, and so does an overlap whose bottom edge reaches the
//!   settled block's top edge. An overlap that only has the top edge reaching
//!   the settled block's bottom edge blocks without landing.

use crate::board::Board;

/// Outcome of a vertical legality test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Configuration is legal
    Clear,
    /// Illegal; the move must be reverted
    Blocked,
    /// Illegal; the move must be reverted and the piece is now settled
    Landed,
}

impl Contact {
    pub fn is_clear(&self) -> bool {
        matches!(self, Contact::Clear)
    }
}

/// Edges of a unit cell in grid units: (left, top, right, bottom)
#[inline(always)]
fn edges(x: i8, y: i8) -> (i16, i16, i16, i16) {
    let (x, y) = (x as i16, y as i16);
    (x, y, x + 1, y + 1)
}

/// Any cell left of column 0 or right of the last column
pub fn outside_columns(board: &Board, cells: &[(i8, i8)]) -> bool {
    cells.iter().any(|&(x, _)| {
        let (left, _, right, _) = edges(x, 0);
        left < 0 || right > board.width() as i16
    })
}

/// Any cell above row 0 or below the last row
pub fn outside_rows(board: &Board, cells: &[(i8, i8)]) -> bool {
    cells.iter().any(|&(_, y)| {
        let (_, top, _, bottom) = edges(0, y);
        top < 0 || bottom > board.height() as i16
    })
}

/// Any cell sharing its position with a settled block
pub fn overlaps_settled(board: &Board, cells: &[(i8, i8)]) -> bool {
    cells.iter().any(|&(x, y)| board.is_occupied(x, y))
}

/// Legality after a horizontal move: column bounds, then settled overlap.
///
/// Returns true when the move must be reverted.
pub fn horizontal_collision(board: &Board, cells: &[(i8, i8)]) -> bool {
    outside_columns(board, cells) || overlaps_settled(board, cells)
}

/// Legality after a vertical move (or at spawn).
///
/// Cells are examined in order; the first one above the top edge blocks and
/// the first one past the floor lands. Only then are settled overlaps checked.
pub fn vertical_collision(board: &Board, cells: &[(i8, i8)]) -> Contact {
    for &(x, y) in cells {
        let (_, top, _, bottom) = edges(x, y);
        if top < 0 {
            return Contact::Blocked;
        }
        if bottom > board.height() as i16 {
            return Contact::Landed;
        }
    }

    for &(x, y) in cells {
        if board.is_occupied(x, y) {
            return overlap_contact((x, y), (x, y));
        }
    }

    Contact::Clear
}

/// Classify an overlap between an active cell and a settled cell.
///
/// Bottom-reaches-top lands the piece; top-reaches-bottom alone only blocks.
/// With the occupancy grid both cells share a position, so an overlap always
/// lands, but the ordering of the two comparisons is kept as is.
pub fn overlap_contact(mine: (i8, i8), theirs: (i8, i8)) -> Contact {
    let (_, my_top, _, my_bottom) = edges(mine.0, mine.1);
    let (_, their_top, _, their_bottom) = edges(theirs.0, theirs.1);
    if my_bottom >= their_top {
        Contact::Landed
    } else if my_top <= their_bottom {
        Contact::Blocked
    } else {
        Contact::Clear
    }
}
