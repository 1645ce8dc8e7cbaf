//! Geometric Rain terminal runner (default binary).
//!
//! Drives the game at a fixed tick rate: gather key events until the next tick,
//! advance the game one tick, redraw. The high score is saved when the game
//! ends, whether by quitting or by the stack reaching the top.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::{error, info, warn};

use geometric_rain::core::{Game, GameConfig, GameSnapshot};
use geometric_rain::input::InputHandler;
use geometric_rain::store::{default_data_dir, HighScoreStore, JsonScoreFile, MemoryScoreStore};
use geometric_rain::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use geometric_rain::types::{GAME_OVER_DELAY_MS, TICK_MS};

const LOG_FILE_NAME: &str = "geometric-rain.log";

#[derive(Parser, Debug)]
#[command(version, about = "Falling-block puzzle game for the terminal", long_about = None)]
struct Args {
    /// Seed for the piece sequence. The same seed deals the same pieces.
    /// Example: `geometric-rain --seed 42`.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Directory holding the high-score file and the log
    /// (defaults to the platform data directory).
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Start with the terminal bell muted (toggle in game with `m`).
    #[arg(short, long)]
    mute: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data_dir = args.data_dir.clone().or_else(default_data_dir);
    init_logging(data_dir.as_deref());

    let mut store = open_store(data_dir.as_deref());
    let top_score = store.load_high_score().unwrap_or_else(|err| {
        warn!("could not read high score: {err}");
        0
    });

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting game with seed {seed}, high score {top_score}");
    let mut game = Game::new(GameConfig::default(), seed, top_score)?;
    let mut bell = TerminalBell::new(args.mute);

    install_panic_hook();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut bell);

    // Always try to restore terminal state.
    let _ = term.exit();

    save_high_score(store.as_mut(), &game);
    let score = game.scorekeeper().current_score();
    println!("Final score: {score}");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game, bell: &mut TerminalBell) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    draw(term, &view, game, &mut snap, &mut fb)?;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    input.handle_key_event(key);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    draw(term, &view, game, &mut snap, &mut fb)?;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        let tick_input = input.take_tick_input();
        game.tick(&tick_input, bell);
        if bell.take_pending() > 0 {
            term.bell()?;
        }

        if game.quit_requested() {
            info!("quit after {} ticks", game.tick_count());
            return Ok(());
        }

        draw(term, &view, game, &mut snap, &mut fb)?;

        if game.is_game_over() {
            // Leave the final board and overlay up for a moment.
            std::thread::sleep(Duration::from_millis(GAME_OVER_DELAY_MS as u64));
            return Ok(());
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    game.snapshot_into(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Log to a file in the data directory; the terminal itself is busy.
///
/// Logging stays off if the file cannot be created.
fn init_logging(dir: Option<&Path>) {
    let Some(dir) = dir else {
        return;
    };
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE_NAME)) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

/// The JSON score file, or an in-memory stand-in when it cannot be opened.
fn open_store(dir: Option<&Path>) -> Box<dyn HighScoreStore> {
    let opened = match dir {
        Some(dir) => JsonScoreFile::open_in(dir),
        None => JsonScoreFile::open_default(),
    };
    match opened {
        Ok(file) => Box::new(file),
        Err(err) => {
            warn!("high score will not be kept: {err}");
            Box::new(MemoryScoreStore::default())
        }
    }
}

fn save_high_score(store: &mut dyn HighScoreStore, game: &Game) {
    let scorekeeper = game.scorekeeper();
    if !scorekeeper.beats_top_score() {
        return;
    }
    match store.save_high_score(scorekeeper.current_score()) {
        Ok(true) => info!("new high score {}", scorekeeper.current_score()),
        Ok(false) => {}
        Err(err) => error!("could not save high score: {err}"),
    }
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}
