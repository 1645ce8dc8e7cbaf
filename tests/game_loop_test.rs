use geometric_rain::core::{Game, GameConfig, NullSound, Piece, RecordingSound};
use geometric_rain::types::{GameInput, GameStatus, PieceKind, SoundEvent, TickInput};

fn idle() -> TickInput {
    TickInput::default()
}

fn down() -> TickInput {
    TickInput::default().with_down_held(true)
}

/// Deterministic input script: a little of everything.
fn scripted(tick: u32) -> TickInput {
    let mut input = TickInput::default().with_down_held(tick % 90 > 60);
    match tick % 37 {
        3 => input.press(GameInput::MoveLeft),
        11 => input.press(GameInput::Rotate),
        19 => input.press(GameInput::MoveRight),
        _ => {}
    }
    input
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut a = Game::new(GameConfig::default(), 2024, 0).unwrap();
    let mut b = Game::new(GameConfig::default(), 2024, 0).unwrap();

    for tick in 0..3000 {
        let input = scripted(tick);
        let ea = a.tick(&input, &mut NullSound);
        let eb = b.tick(&input, &mut NullSound);
        assert_eq!(ea, eb, "tick {tick}");
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn idle_game_stacks_up_and_ends() {
    let mut game = Game::new(GameConfig::default(), 7, 0).unwrap();
    let mut sound = RecordingSound::default();

    let mut ticks = 0;
    while !game.is_game_over() {
        game.tick(&idle(), &mut sound);
        ticks += 1;
        assert!(ticks < 100_000, "game never ended");
    }

    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(sound.count(SoundEvent::PieceSettled) > 0);
    assert_eq!(sound.count(SoundEvent::RowCompleted), 0);

    // Finished games ignore further ticks.
    let count = game.tick_count();
    let snap = game.snapshot();
    game.tick(&down(), &mut sound);
    assert_eq!(game.tick_count(), count);
    assert_eq!(game.snapshot(), snap);
}

#[test]
fn spawn_stats_match_pieces_dealt() {
    let mut game = Game::new(GameConfig::default(), 31, 0).unwrap();
    let mut settles = 0u32;
    for _ in 0..2000 {
        if game.tick(&down(), &mut NullSound).settled {
            settles += 1;
        }
        if game.is_game_over() {
            break;
        }
    }
    let total: u32 = game.scorekeeper().stats().iter().sum();
    // The first piece plus one spawn per settle.
    assert_eq!(total, settles + 1);
}

#[test]
fn bottom_row_clears_on_the_tick_after_settling() {
    let mut game = Game::new(GameConfig::default(), 5, 0).unwrap();
    // Leave exactly the I piece's columns open.
    for x in (0..10).filter(|x| !(2..6).contains(x)) {
        game.board_mut().set(x, 19, Some(PieceKind::Z));
    }
    let piece = Piece::spawn(PieceKind::I, game.board());
    game.set_piece(piece);

    let mut sound = RecordingSound::default();
    let mut guard = 0;
    while !game.tick(&down(), &mut sound).settled {
        guard += 1;
        assert!(guard < 100);
    }
    assert!(game.board().is_row_full(19));
    let before = game.scorekeeper().current_score();

    let events = game.tick(&idle(), &mut sound);
    assert_eq!(events.rows_cleared, 1);
    assert_eq!(events.points, 40);
    assert_eq!(game.board().block_count(), 0);
    assert_eq!(game.scorekeeper().total_rows_cleared(), 1);
    assert!(game.scorekeeper().current_score() >= before + 40);
    assert_eq!(sound.count(SoundEvent::RowCompleted), 1);
}

#[test]
fn pause_freezes_and_resumes() {
    let mut game = Game::new(GameConfig::default(), 9, 0).unwrap();
    game.tick(&idle().with(GameInput::TogglePause), &mut NullSound);
    assert!(game.is_paused());

    let pos = game.piece().position();
    for _ in 0..200 {
        game.tick(&down().with(GameInput::MoveLeft), &mut NullSound);
    }
    assert_eq!(game.piece().position(), pos);
    assert_eq!(game.scorekeeper().current_score(), 0);

    game.tick(&idle().with(GameInput::TogglePause), &mut NullSound);
    assert_eq!(game.status(), GameStatus::Running);
    for _ in 0..5 {
        game.tick(&down(), &mut NullSound);
    }
    assert!(game.piece().position().1 > pos.1);
}

#[test]
fn blocked_spawn_ends_the_game() {
    let mut game = Game::new(GameConfig::default(), 3, 0).unwrap();
    for y in 2..20 {
        game.board_mut().set(4, y, Some(PieceKind::L));
    }
    let piece = Piece::spawn(PieceKind::O, game.board());
    assert!(!piece.is_game_over());
    game.set_piece(piece);

    let events = game.tick(&down(), &mut NullSound);
    assert!(events.settled);
    assert!(events.game_over);
    assert!(game.is_game_over());
    assert!(game.piece().is_game_over());
}

#[test]
fn quit_finishes_without_game_over() {
    let mut game = Game::new(GameConfig::default(), 3, 500).unwrap();
    game.tick(&idle().with(GameInput::Quit), &mut NullSound);
    assert!(game.quit_requested());
    assert!(game.is_finished());
    assert!(!game.is_game_over());
    assert_eq!(game.snapshot().high_score, 500);
}

#[test]
fn snapshot_tracks_live_high_score() {
    let mut game = Game::new(GameConfig::default(), 3, 4).unwrap();
    for _ in 0..10 {
        game.tick(&down(), &mut NullSound);
    }
    let snap = game.snapshot();
    assert_eq!(snap.score, game.scorekeeper().current_score());
    assert!(snap.score > 4);
    assert_eq!(snap.high_score, snap.score);
}
