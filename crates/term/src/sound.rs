//! Terminal bell as a sound sink.
//!
//! The game loop runs without I/O, so the bell only counts rings; the runner
//! drains them with [`TerminalBell::take_pending`] and writes them out
//! alongside the frame.

use crate::core::SoundSink;
use crate::types::SoundEvent;

#[derive(Debug, Clone, Default)]
pub struct TerminalBell {
    muted: bool,
    pending: u32,
}

impl TerminalBell {
    pub fn new(muted: bool) -> Self {
        Self { muted, pending: 0 }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether an event is loud enough to ring the bell.
    ///
    /// Rotations and settles happen constantly, so only clears and level-ups ring.
    pub fn rings_for(event: SoundEvent) -> bool {
        matches!(event, SoundEvent::RowCompleted | SoundEvent::LevelUp)
    }

    /// Number of rings queued since the last call; resets to zero.
    pub fn take_pending(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

impl SoundSink for TerminalBell {
    fn play(&mut self, event: SoundEvent) {
        if !self.muted && Self::rings_for(event) {
            self.pending = self.pending.saturating_add(1);
        }
    }

    fn toggle_muted(&mut self) {
        self.muted = !self.muted;
        if self.muted {
            self.pending = 0;
        }
    }
}
