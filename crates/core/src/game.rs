//! Game module - the per-tick loop and timing controller
//!
//! One call to [`Game::tick`] is one frame of the 60 Hz loop. A running tick
//! does, in order:
//!
//! 1. clear rows completed by the previous tick's settlement
//! 2. check for a level-up
//! 3. apply input (soft drop first, then rotate, left, right)
//! 4. advance gravity
//! 5. count the tick
//!
//! While paused only the pause, sound and quit controls do anything.

use log::{debug, info};

use crate::board::Board;
use crate::clearing::{check_level_up, process_completed_rows};
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::Scorekeeper;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::sound::SoundSink;
use crate::types::{GameStatus, PieceKind, SoundEvent, TickInput};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// The active piece stepped down at least once
    pub moved_down: bool,
    /// A piece joined the settled field
    pub settled: bool,
    pub rows_cleared: usize,
    pub points: u32,
    pub level_up: Option<u32>,
    pub rotated: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    piece: Piece,
    next_kind: PieceKind,
    randomizer: PieceRandomizer,
    scorekeeper: Scorekeeper,
    status: GameStatus,
    ticks_since_last_fall: u32,
    slow_tick_interval: u32,
    fast_tick_interval: u32,
    fast_drop_active: bool,
    fast_drop_locked: bool,
    fast_drop_lockout_ticks: u32,
    quit_requested: bool,
    tick_count: u64,
}

impl Game {
    /// Start a game: validate the config, spawn the first piece and draw the
    /// one on deck. The first piece counts toward the spawn stats.
    pub fn new(config: GameConfig, seed: u32, top_score: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.grid_width, config.grid_height);
        let mut randomizer = PieceRandomizer::new(seed);
        let first = randomizer.draw();
        let piece = Piece::spawn(first, &board);
        let next_kind = randomizer.draw();

        let mut scorekeeper = Scorekeeper::new(top_score);
        scorekeeper.record_spawn(first);

        info!(
            "new game: {}x{} grid, seed {}, high score {}",
            config.grid_width, config.grid_height, seed, top_score
        );

        Ok(Self {
            config,
            board,
            piece,
            next_kind,
            randomizer,
            scorekeeper,
            status: GameStatus::Running,
            ticks_since_last_fall: 0,
            slow_tick_interval: config.fall_frames_interval,
            fast_tick_interval: config.fast_fall_frames_interval,
            fast_drop_active: false,
            fast_drop_locked: false,
            fast_drop_lockout_ticks: 0,
            quit_requested: false,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the settled field (used by tests)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Replace the active piece (used by tests and scripted setups)
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn scorekeeper(&self) -> &Scorekeeper {
        &self.scorekeeper
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Game over or quit: the runner should stop ticking
    pub fn is_finished(&self) -> bool {
        self.is_game_over() || self.quit_requested
    }

    pub fn ticks_since_last_fall(&self) -> u32 {
        self.ticks_since_last_fall
    }

    pub fn slow_tick_interval(&self) -> u32 {
        self.slow_tick_interval
    }

    pub fn fast_drop_active(&self) -> bool {
        self.fast_drop_active
    }

    pub fn fast_drop_locked(&self) -> bool {
        self.fast_drop_locked
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance one frame.
    pub fn tick(&mut self, input: &TickInput, sound: &mut dyn SoundSink) -> TickEvents {
        let mut events = TickEvents::default();
        if self.is_finished() {
            return events;
        }
        self.tick_count += 1;

        if input.quit {
            info!("quit requested at score {}", self.scorekeeper.current_score());
            self.quit_requested = true;
            return events;
        }
        if input.toggle_sound {
            sound.toggle_muted();
        }

        if self.status == GameStatus::Paused {
            if input.toggle_pause {
                debug!("resumed");
                self.status = GameStatus::Running;
            }
            return events;
        }

        self.clear_completed_rows(sound, &mut events);
        self.check_level(sound, &mut events);

        self.apply_input(input, sound, &mut events);
        if self.is_game_over() {
            return events;
        }

        self.maybe_fall(sound, &mut events);
        if self.is_game_over() {
            return events;
        }
        self.ticks_since_last_fall = self.ticks_since_last_fall.saturating_add(1);

        // Takes effect from the next tick; this one has already run.
        if input.toggle_pause {
            debug!("paused");
            self.status = GameStatus::Paused;
        }

        events
    }

    fn clear_completed_rows(&mut self, sound: &mut dyn SoundSink, events: &mut TickEvents) {
        let report = process_completed_rows(&mut self.board, &mut self.scorekeeper, &self.config);
        if report.rows == 0 {
            return;
        }
        events.rows_cleared = report.rows;
        events.points = report.points;
        // A clear that reaches the next level gets the level-up sound instead.
        if self.scorekeeper.rows_cleared() < self.config.rows_per_level {
            sound.play(SoundEvent::RowCompleted);
        }
    }

    fn check_level(&mut self, sound: &mut dyn SoundSink, events: &mut TickEvents) {
        let Some(level) = check_level_up(
            &mut self.scorekeeper,
            &self.config,
            &mut self.slow_tick_interval,
        ) else {
            return;
        };
        info!(
            "level {} reached, fall interval now {} ticks",
            level, self.slow_tick_interval
        );
        sound.play(SoundEvent::LevelUp);
        events.level_up = Some(level);
    }

    fn apply_input(
        &mut self,
        input: &TickInput,
        sound: &mut dyn SoundSink,
        events: &mut TickEvents,
    ) {
        if input.down_held {
            if !self.fast_drop_locked {
                if self.ticks_since_last_fall >= self.fast_tick_interval {
                    self.maybe_fall(sound, events);
                    if self.is_game_over() {
                        return;
                    }
                }
                // A settle inside the step above locks fast drop; leave it off.
                if !self.fast_drop_locked {
                    self.fast_drop_active = true;
                }
            }
        } else {
            self.fast_drop_locked = false;
            self.fast_drop_active = false;
        }

        if input.rotate && self.piece.rotate(false, &self.board) {
            sound.play(SoundEvent::Rotate);
            events.rotated = true;
        }
        if input.move_left {
            self.piece.move_by(-1, 0, &self.board);
        }
        if input.move_right {
            self.piece.move_by(1, 0, &self.board);
        }
    }

    /// Gravity step: count down the fast-drop lockout, then attempt one move
    /// down when the slow interval has elapsed or fast drop is active.
    fn maybe_fall(&mut self, sound: &mut dyn SoundSink, events: &mut TickEvents) {
        if self.fast_drop_locked {
            self.fast_drop_lockout_ticks += 1;
            if self.fast_drop_lockout_ticks >= self.config.fast_fall_lockout_ticks {
                self.fast_drop_locked = false;
                self.fast_drop_lockout_ticks = 0;
            }
        }

        if self.ticks_since_last_fall < self.slow_tick_interval && !self.fast_drop_active {
            return;
        }

        let moved = self.piece.move_by(0, 1, &self.board);
        if self.piece.is_settled() {
            self.settle_piece(sound, events);
        } else {
            self.scorekeeper.record_drop(self.fast_drop_active);
            events.moved_down |= moved;
        }
        self.ticks_since_last_fall = 0;
    }

    fn settle_piece(&mut self, sound: &mut dyn SoundSink, events: &mut TickEvents) {
        let settled_kind = self.piece.kind();
        let stored = self.board.settle(&self.piece.cells(), settled_kind);
        debug!(
            "{} settled at {:?} ({} blocks)",
            settled_kind.as_str(),
            self.piece.position(),
            stored
        );

        let kind = self.next_kind;
        self.piece = Piece::spawn(kind, &self.board);
        self.next_kind = self.randomizer.draw();
        self.scorekeeper.record_spawn(kind);
        sound.play(SoundEvent::PieceSettled);

        self.fast_drop_active = false;
        self.fast_drop_locked = true;
        self.fast_drop_lockout_ticks = 0;
        events.settled = true;

        if self.piece.is_game_over() {
            info!(
                "game over: score {}, level {}, {} rows",
                self.scorekeeper.current_score(),
                self.scorekeeper.current_level(),
                self.scorekeeper.total_rows_cleared()
            );
            self.status = GameStatus::GameOver;
            events.game_over = true;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(&self.piece));
        out.next = self.next_kind;
        out.stats = *self.scorekeeper.stats();
        out.score = self.scorekeeper.current_score();
        out.high_score = self.scorekeeper.best_score();
        out.level = self.scorekeeper.current_level();
        out.rows_cleared = self.scorekeeper.rows_cleared();
        out.total_rows_cleared = self.scorekeeper.total_rows_cleared();
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
