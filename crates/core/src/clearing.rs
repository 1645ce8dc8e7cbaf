//! Row clearing module - completed-row detection, compaction and level-up
//!
//! Completed rows are cleared top-most first. Each clear drops every row above
//! it by one, which leaves the indices of the remaining (lower) completed rows
//! untouched, so the sorted list stays valid for the whole pass.

use log::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::scoring::{next_fall_interval, Scorekeeper};

/// Outcome of one clearing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearReport {
    pub rows: usize,
    pub points: u32,
}

/// Indices of every full row, top to bottom
pub fn completed_rows(board: &Board) -> Vec<usize> {
    (0..board.height() as usize)
        .filter(|&y| board.is_row_full(y))
        .collect()
}

/// Clear the given rows. `rows` must be sorted ascending.
pub fn clear_rows(board: &mut Board, rows: &[usize]) {
    for &y in rows {
        board.clear_row(y);
    }
}

/// Detect, clear and score every completed row.
pub fn process_completed_rows(
    board: &mut Board,
    scorekeeper: &mut Scorekeeper,
    config: &GameConfig,
) -> ClearReport {
    let rows = completed_rows(board);
    if rows.is_empty() {
        return ClearReport::default();
    }

    clear_rows(board, &rows);
    let points = scorekeeper.record_rows(rows.len(), &config.rewards);
    debug!(
        "cleared {} row(s) {:?} for {} points",
        rows.len(),
        rows,
        points
    );

    ClearReport {
        rows: rows.len(),
        points,
    }
}

/// Advance the level when enough rows have been cleared, shortening
/// `fall_interval`. Returns the new level on a level-up.
pub fn check_level_up(
    scorekeeper: &mut Scorekeeper,
    config: &GameConfig,
    fall_interval: &mut u32,
) -> Option<u32> {
    let level = scorekeeper.level_up_if_due(config.rows_per_level)?;
    *fall_interval = next_fall_interval(*fall_interval, level);
    Some(level)
}
