//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`GameView`] paints a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes that buffer to the terminal, rewriting only what changed.
//!
//! Board cells are drawn two columns wide to compensate for the usual
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sound;

pub use geometric_rain_core as core;
pub use geometric_rain_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::TerminalBell;
