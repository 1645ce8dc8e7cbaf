//! Game configuration - the immutable rule set handed to the game loop
//!
//! A [`GameConfig`] is built once at startup, validated, and then only read.

use thiserror::Error;

use crate::shape::MAX_SHAPE_SIZE;
use crate::types::{
    FALL_FRAMES_INTERVAL, FAST_FALL_FRAMES_INTERVAL, FAST_FALL_LOCKOUT_TICKS, GRID_HEIGHT,
    GRID_WIDTH, LINE_REWARDS, ROWS_PER_LEVEL,
};

/// Largest grid side whose rotation candidates still fit signed 8-bit cell
/// coordinates: an anchor on the last row or column plus a full matrix span.
pub const MAX_GRID_SIDE: u8 = i8::MAX as u8 - (MAX_SHAPE_SIZE as u8 - 1);

/// Reasons a configuration is rejected at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 6x4 cells, got {width}x{height}")]
    GridTooSmall { width: u8, height: u8 },
    #[error("grid must be at most {max}x{max} cells, got {width}x{height}", max = MAX_GRID_SIDE)]
    GridTooLarge { width: u8, height: u8 },
    #[error("{name} must be at least 1 tick")]
    ZeroInterval { name: &'static str },
    #[error("rows per level must be at least 1")]
    ZeroRowsPerLevel,
    #[error("reward for {rows} row(s) must be positive")]
    ZeroReward { rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u8,
    pub grid_height: u8,
    /// Ticks per natural fall step at level 0
    pub fall_frames_interval: u32,
    pub fast_fall_frames_interval: u32,
    pub fast_fall_lockout_ticks: u32,
    /// Reward for clearing `n` rows at once lives at index `n - 1`
    pub rewards: [u32; 4],
    pub rows_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            fall_frames_interval: FALL_FRAMES_INTERVAL,
            fast_fall_frames_interval: FAST_FALL_FRAMES_INTERVAL,
            fast_fall_lockout_ticks: FAST_FALL_LOCKOUT_TICKS,
            rewards: LINE_REWARDS,
            rows_per_level: ROWS_PER_LEVEL,
        }
    }
}

impl GameConfig {
    pub fn with_grid(mut self, width: u8, height: u8) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_fall_frames_interval(mut self, ticks: u32) -> Self {
        self.fall_frames_interval = ticks;
        self
    }

    pub fn with_fast_fall_frames_interval(mut self, ticks: u32) -> Self {
        self.fast_fall_frames_interval = ticks;
        self
    }

    pub fn with_fast_fall_lockout_ticks(mut self, ticks: u32) -> Self {
        self.fast_fall_lockout_ticks = ticks;
        self
    }

    pub fn with_rewards(mut self, rewards: [u32; 4]) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        // Spawn matrices reach column 5 (T, J, L, S, Z at column 3; I at column 2).
        if width < 6 || height < 4 {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.fall_frames_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "fall_frames_interval",
            });
        }
        if self.fast_fall_frames_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "fast_fall_frames_interval",
            });
        }
        if self.rows_per_level == 0 {
            return Err(ConfigError::ZeroRowsPerLevel);
        }
        if let Some(idx) = self.rewards.iter().position(|&r| r == 0) {
            return Err(ConfigError::ZeroReward { rows: idx + 1 });
        }
        Ok(())
    }
}
