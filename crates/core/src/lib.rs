//! Core game logic module - deterministic falling-block simulation
//!
//! Everything here is pure state and rules. Rendering, audio and persistence
//! live in other crates and talk to the core through [`GameSnapshot`] and
//! [`SoundSink`].
//!
//! # Module Structure
//!
//! - [`shape`]: square occupancy matrices and clockwise rotation
//! - [`board`]: the settled field, an O(1) occupancy grid
//! - [`collision`]: horizontal and vertical legality tests
//! - [`piece`]: the active piece (spawn, move, rotate, settle detection)
//! - [`clearing`]: completed-row detection, compaction and level-up
//! - [`scoring`]: rewards, the fall-speed curve and the [`Scorekeeper`]
//! - [`game`]: the per-tick loop with gravity and fast-drop lockout
//! - [`rng`]: uniform piece selection from a seeded LCG
//! - [`snapshot`]: owned frame data for renderers
//! - [`sound`]: the [`SoundSink`] seam for sound triggers
//! - [`config`]: the validated rule set
//!
//! # Game Rules
//!
//! - **Randomizer**: each piece is drawn uniformly from the seven kinds
//! - **Rotation**: clockwise, no wall kicks; an illegal turn is simply refused
//! - **Settling**: a piece settles when a step down would cross the floor or
//!   land on a settled block
//! - **Fast drop**: holding down drops one row per tick for 2 points a row;
//!   after a settle it stays locked for 15 ticks
//! - **Scoring**: 40/100/300/1200 for 1-4 rows, times `level + 1`
//! - **Levels**: every 10 rows, each level shortening the fall interval
//!
//! # Example
//!
//! ```
//! use geometric_rain_core::{Game, GameConfig, NullSound};
//! use geometric_rain_types::TickInput;
//!
//! let mut game = Game::new(GameConfig::default(), 12345, 0).unwrap();
//! let held = TickInput::default().with_down_held(true);
//! for _ in 0..3 {
//!     game.tick(&held, &mut NullSound);
//! }
//! assert_eq!(game.scorekeeper().current_score(), 6);
//! ```

pub mod board;
pub mod clearing;
pub mod collision;
pub mod config;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod sound;

pub use geometric_rain_types as types;

pub use board::Board;
pub use clearing::{check_level_up, completed_rows, process_completed_rows, ClearReport};
pub use collision::{horizontal_collision, vertical_collision, Contact};
pub use config::{ConfigError, GameConfig};
pub use game::{Game, TickEvents};
pub use piece::{Block, Piece};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{drop_reward, line_clear_reward, next_fall_interval, Scorekeeper};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use sound::{NullSound, RecordingSound, SoundSink};
