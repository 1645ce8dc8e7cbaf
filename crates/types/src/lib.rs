//! Shared types module - constants and plain data used by every crate
//!
//! Everything in here is pure data with no external dependencies, so the
//! simulation core, the terminal view and the input layer can all agree on the
//! same vocabulary without depending on each other.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing Constants
//!
//! The game is driven by a fixed 60 Hz tick. Fall speeds are expressed in
//! ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_HZ` | 60 | Target ticks per second |
//! | `TICK_MS` | 16 | Tick interval in milliseconds |
//! | `FALL_FRAMES_INTERVAL` | 48 | Ticks per natural fall step at level 0 |
//! | `FAST_FALL_FRAMES_INTERVAL` | 2 | Ticks between fast-drop steps |
//! | `FAST_FALL_LOCKOUT_TICKS` | 15 | Fast-drop suppression after a piece settles |
//! | `GAME_OVER_DELAY_MS` | 5000 | "Game Over" display time before shutdown |
//!
//! # Examples
//!
//! ```
//! use geometric_rain_types::{GameInput, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::I.spawn_column(), 2);
//! assert_eq!(GameInput::from_str("rotate"), Some(GameInput::Rotate));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (10, 20));
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Target tick rate of the game loop
pub const TICK_HZ: u32 = 60;

/// Tick interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Ticks per natural fall step at level 0
pub const FALL_FRAMES_INTERVAL: u32 = 48;

/// Ticks between fast-drop steps while the down key is held
pub const FAST_FALL_FRAMES_INTERVAL: u32 = 2;

/// Ticks fast-drop stays locked after a piece settles
pub const FAST_FALL_LOCKOUT_TICKS: u32 = 15;

/// Rows needed to advance one level
pub const ROWS_PER_LEVEL: u32 = 10;

/// How long the "Game Over" frame stays up before shutdown
pub const GAME_OVER_DELAY_MS: u32 = 5000;

/// Line clear reward table, indexed by `rows - 1`
///
/// Multiplied by `level + 1` when awarded.
pub const LINE_REWARDS: [u32; 4] = [40, 100, 300, 1200];

/// The seven tetromino kinds
///
/// Declaration order is the canonical index order used for per-kind stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind in index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Order used by the random draw and the shape-count panel
    pub const STATS_ORDER: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::S,
        PieceKind::L,
        PieceKind::I,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter name, as shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Stable index into per-kind tables
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display color as RGB
    pub fn color(&self) -> [u8; 3] {
        match self {
            PieceKind::I => [110, 236, 238],
            PieceKind::J => [0, 0, 230],
            PieceKind::L => [228, 163, 57],
            PieceKind::O => [240, 240, 79],
            PieceKind::S => [110, 236, 71],
            PieceKind::T => [146, 28, 231],
            PieceKind::Z => [220, 47, 33],
        }
    }

    /// Column of the shape matrix's left edge at spawn
    pub fn spawn_column(&self) -> i8 {
        match self {
            PieceKind::I => 2,
            _ => 3,
        }
    }

    /// Bounding width and height (in cells) of the spawn orientation
    pub fn footprint(&self) -> (u8, u8) {
        match self {
            PieceKind::I => (4, 1),
            PieceKind::O => (2, 2),
            _ => (3, 2),
        }
    }
}

/// A cell of the settled field: empty, or owned by a piece kind
pub type Cell = Option<PieceKind>;

/// Edge-triggered player inputs
///
/// Each is acted on once per press. Soft drop is not listed here because it
/// is level-triggered; see [`TickInput::down_held`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    Rotate,
    TogglePause,
    ToggleSound,
    Quit,
}

impl GameInput {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameInput::MoveLeft),
            "moveright" | "right" => Some(GameInput::MoveRight),
            "rotate" => Some(GameInput::Rotate),
            "togglepause" | "pause" => Some(GameInput::TogglePause),
            "togglesound" | "sound" => Some(GameInput::ToggleSound),
            "quit" => Some(GameInput::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameInput::MoveLeft => "moveLeft",
            GameInput::MoveRight => "moveRight",
            GameInput::Rotate => "rotate",
            GameInput::TogglePause => "togglePause",
            GameInput::ToggleSound => "toggleSound",
            GameInput::Quit => "quit",
        }
    }
}

/// Input gathered for a single tick
///
/// Presses are flags, so pressing the same key twice within one tick acts
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
    pub toggle_pause: bool,
    pub toggle_sound: bool,
    pub quit: bool,
    /// Down key currently held (soft drop)
    pub down_held: bool,
}

impl TickInput {
    /// Record an edge-triggered press
    pub fn press(&mut self, input: GameInput) {
        *self.flag_mut(input) = true;
    }

    pub fn pressed(&self, input: GameInput) -> bool {
        match input {
            GameInput::MoveLeft => self.move_left,
            GameInput::MoveRight => self.move_right,
            GameInput::Rotate => self.rotate,
            GameInput::TogglePause => self.toggle_pause,
            GameInput::ToggleSound => self.toggle_sound,
            GameInput::Quit => self.quit,
        }
    }

    /// Builder form of [`TickInput::press`]
    pub fn with(mut self, input: GameInput) -> Self {
        self.press(input);
        self
    }

    pub fn with_down_held(mut self, held: bool) -> Self {
        self.down_held = held;
        self
    }

    /// True when nothing is pressed or held
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    fn flag_mut(&mut self, input: GameInput) -> &mut bool {
        match input {
            GameInput::MoveLeft => &mut self.move_left,
            GameInput::MoveRight => &mut self.move_right,
            GameInput::Rotate => &mut self.rotate,
            GameInput::TogglePause => &mut self.toggle_pause,
            GameInput::ToggleSound => &mut self.toggle_sound,
            GameInput::Quit => &mut self.quit,
        }
    }
}

/// Named sound triggers emitted by the game loop
///
/// Fire-and-forget: the core never inspects what a sink does with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Rotate,
    PieceSettled,
    RowCompleted,
    LevelUp,
}

impl SoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Rotate => "rotate",
            SoundEvent::PieceSettled => "piece_settled",
            SoundEvent::RowCompleted => "row_completed",
            SoundEvent::LevelUp => "level_up",
        }
    }
}

/// Lifecycle state of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    /// Terminal: the freshly spawned piece collided on arrival
    GameOver,
}
