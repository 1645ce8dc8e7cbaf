//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameInput`] presses and a
//! held-down soft-drop flag, and gathers them into one
//! [`crate::types::TickInput`] per tick.

pub mod handler;
pub mod map;

pub use geometric_rain_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_soft_drop_key, should_quit, KeyAction};
