//! Sound triggers - the seam between the game loop and whatever plays audio

use crate::types::SoundEvent;

/// Receives fire-and-forget sound events from the game loop
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);

    /// Flip between muted and audible. Sinks without a mute switch ignore it.
    fn toggle_muted(&mut self) {}
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Records every event it receives, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSound {
    pub events: Vec<SoundEvent>,
    pub toggles: u32,
}

impl RecordingSound {
    pub fn count(&self, event: SoundEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl SoundSink for RecordingSound {
    fn play(&mut self, event: SoundEvent) {
        self.events.push(event);
    }

    fn toggle_muted(&mut self) {
        self.toggles += 1;
    }
}
