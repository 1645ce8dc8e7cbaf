//! Per-tick input collection for terminal environments.
//!
//! Presses between two ticks are gathered into one [`TickInput`]; pressing the
//! same key twice before the tick counts once. The down key is tracked as held
//! until it is released. Terminals that never send release events get an
//! auto-release once no press or repeat has arrived for a short timeout.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_soft_drop_key, KeyAction};
use crate::types::{GameInput, TickInput};

// Long enough to bridge the gap between terminal auto-repeat events, short
// enough that a tap does not read as a long hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct InputHandler {
    pending: TickInput,
    down_held: bool,
    last_down_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pending: TickInput::default(),
            down_held: false,
            last_down_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn down_held(&self) -> bool {
        self.down_held
    }

    /// Feed one key event. Returns true if the key meant anything to the game.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        self.handle_key_event_at(key, Instant::now())
    }

    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind == KeyEventKind::Release {
            if is_soft_drop_key(key.code) {
                self.down_held = false;
            }
            return false;
        }

        match handle_key_event(key) {
            Some(KeyAction::SoftDrop) => {
                self.down_held = true;
                self.last_down_time = now;
                true
            }
            // Auto-repeat only keeps the down key alive; other keys act per press.
            Some(KeyAction::Press(_)) if key.kind == KeyEventKind::Repeat => false,
            Some(KeyAction::Press(input)) => {
                self.press(input);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, input: GameInput) {
        self.pending.press(input);
    }

    /// Hand over everything gathered since the last tick.
    pub fn take_tick_input(&mut self) -> TickInput {
        self.take_tick_input_at(Instant::now())
    }

    pub fn take_tick_input_at(&mut self, now: Instant) -> TickInput {
        // Auto-release when the terminal does not emit release events.
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.down_held && now.saturating_duration_since(self.last_down_time) > timeout {
            self.down_held = false;
        }

        let mut out = std::mem::take(&mut self.pending);
        out.down_held = self.down_held;
        out
    }

    pub fn reset(&mut self) {
        self.pending = TickInput::default();
        self.down_held = false;
        self.last_down_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
