//! Scoring module - points, levels and the fall-speed curve
//!
//! Line clears pay `reward[n - 1] * (level + 1)`. Each successful gravity or
//! soft-drop step pays 1 point (2 while fast drop is active). Every
//! `rows_per_level` cleared rows advance the level, which shortens the natural
//! fall interval along a piecewise curve.

use crate::types::PieceKind;

/// Points for clearing `rows` rows at once on `level`.
///
/// Anything outside 1..=4 rows pays nothing.
pub fn line_clear_reward(rewards: &[u32; 4], rows: usize, level: u32) -> u32 {
    if rows == 0 || rows > rewards.len() {
        return 0;
    }
    rewards[rows - 1].saturating_mul(level.saturating_add(1))
}

/// Points for one successful downward step
pub fn drop_reward(fast_drop: bool) -> u32 {
    if fast_drop {
        2
    } else {
        1
    }
}

/// Natural fall interval after advancing to `new_level`.
///
/// Every level-up takes 2 ticks off, plus 5 more up to level 8, 2 more up to
/// level 12 and 1 more up to level 15. Never goes below 1 tick.
pub fn next_fall_interval(current: u32, new_level: u32) -> u32 {
    let extra = match new_level {
        0..=8 => 5,
        9..=12 => 2,
        13..=15 => 1,
        _ => 0,
    };
    current.saturating_sub(2 + extra).max(1)
}

/// Score, level and per-kind spawn statistics for one game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scorekeeper {
    current_score: u32,
    top_score: u32,
    current_level: u32,
    /// Progress toward the next level
    rows_cleared: u32,
    total_rows_cleared: u32,
    /// Spawn counts indexed by [`PieceKind::index`]
    stats: [u32; 7],
}

impl Scorekeeper {
    pub fn new(top_score: u32) -> Self {
        Self {
            top_score,
            ..Self::default()
        }
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    /// High score loaded at startup
    pub fn top_score(&self) -> u32 {
        self.top_score
    }

    /// The higher of the stored high score and the running score
    pub fn best_score(&self) -> u32 {
        self.top_score.max(self.current_score)
    }

    pub fn beats_top_score(&self) -> bool {
        self.current_score > self.top_score
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn total_rows_cleared(&self) -> u32 {
        self.total_rows_cleared
    }

    pub fn stats(&self) -> &[u32; 7] {
        &self.stats
    }

    pub fn spawn_count(&self, kind: PieceKind) -> u32 {
        self.stats[kind.index()]
    }

    pub fn record_spawn(&mut self, kind: PieceKind) {
        self.stats[kind.index()] = self.stats[kind.index()].saturating_add(1);
    }

    /// Credit `rows` simultaneously cleared rows; returns the points awarded.
    pub fn record_rows(&mut self, rows: usize, rewards: &[u32; 4]) -> u32 {
        if rows == 0 {
            return 0;
        }
        let points = line_clear_reward(rewards, rows, self.current_level);
        self.rows_cleared = self.rows_cleared.saturating_add(rows as u32);
        self.total_rows_cleared = self.total_rows_cleared.saturating_add(rows as u32);
        self.current_score = self.current_score.saturating_add(points);
        points
    }

    pub fn record_drop(&mut self, fast_drop: bool) {
        self.current_score = self.current_score.saturating_add(drop_reward(fast_drop));
    }

    /// Advance one level once `rows_per_level` rows have been cleared.
    ///
    /// Returns the new level when a level-up happened.
    pub fn level_up_if_due(&mut self, rows_per_level: u32) -> Option<u32> {
        if self.rows_cleared < rows_per_level {
            return None;
        }
        self.rows_cleared = 0;
        self.current_level = self.current_level.saturating_add(1);
        Some(self.current_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LINE_REWARDS;

    #[test]
    fn test_line_clear_rewards() {
        assert_eq!(line_clear_reward(&LINE_REWARDS, 1, 0), 40);
        assert_eq!(line_clear_reward(&LINE_REWARDS, 2, 0), 100);
        assert_eq!(line_clear_reward(&LINE_REWARDS, 3, 1), 600);
        assert_eq!(line_clear_reward(&LINE_REWARDS, 4, 2), 3600);
        assert_eq!(line_clear_reward(&LINE_REWARDS, 0, 5), 0);
        assert_eq!(line_clear_reward(&LINE_REWARDS, 5, 0), 0);
    }

    #[test]
    fn test_drop_rewards() {
        assert_eq!(drop_reward(false), 1);
        assert_eq!(drop_reward(true), 2);
    }

    #[test]
    fn test_fall_interval_curve() {
        assert_eq!(next_fall_interval(48, 1), 41);
        assert_eq!(next_fall_interval(41, 8), 34);
        assert_eq!(next_fall_interval(30, 9), 26);
        assert_eq!(next_fall_interval(30, 13), 27);
        assert_eq!(next_fall_interval(30, 16), 28);
        assert_eq!(next_fall_interval(3, 1), 1);
        assert_eq!(next_fall_interval(1, 20), 1);
    }

    #[test]
    fn test_fall_interval_decreases_until_floor() {
        let mut interval = 48;
        for level in 1..40 {
            let next = next_fall_interval(interval, level);
            assert!(next >= 1);
            if interval > 1 {
                assert!(next < interval, "level {level}: {interval} -> {next}");
            }
            interval = next;
        }
        assert_eq!(interval, 1);
    }

    #[test]
    fn test_record_rows_and_level_up() {
        let mut s = Scorekeeper::new(500);
        assert_eq!(s.record_rows(4, &LINE_REWARDS), 1200);
        assert_eq!(s.level_up_if_due(10), None);
        s.record_rows(4, &LINE_REWARDS);
        s.record_rows(2, &LINE_REWARDS);
        assert_eq!(s.rows_cleared(), 10);
        assert_eq!(s.level_up_if_due(10), Some(1));
        assert_eq!(s.rows_cleared(), 0);
        assert_eq!(s.total_rows_cleared(), 10);
        assert_eq!(s.current_score(), 1200 + 1200 + 100);
        // Level 1 doubles the reward.
        assert_eq!(s.record_rows(1, &LINE_REWARDS), 80);
    }

    #[test]
    fn test_best_score_and_spawn_stats() {
        let mut s = Scorekeeper::new(100);
        assert_eq!(s.best_score(), 100);
        assert!(!s.beats_top_score());
        for _ in 0..60 {
            s.record_drop(true);
        }
        assert_eq!(s.best_score(), 120);
        assert!(s.beats_top_score());

        s.record_spawn(PieceKind::T);
        s.record_spawn(PieceKind::T);
        assert_eq!(s.spawn_count(PieceKind::T), 2);
        assert_eq!(s.spawn_count(PieceKind::I), 0);
    }
}
