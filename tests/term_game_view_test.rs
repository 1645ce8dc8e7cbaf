use geometric_rain::core::{Game, GameConfig, NullSound, Piece};
use geometric_rain::term::{FrameBuffer, GameView, Viewport};
use geometric_rain::types::{GameInput, PieceKind, TickInput};

fn find(fb: &FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn live_game_renders_every_panel() {
    let game = Game::new(GameConfig::default(), 11, 2500).unwrap();
    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(100, 30));

    for label in ["SHAPE COUNTS", "ROWS 000", "HIGH", "002500", "POINTS", "ON DECK", "LEVEL"] {
        assert!(find(&fb, label).is_some(), "missing {label}");
    }
}

#[test]
fn active_piece_is_drawn_in_its_color() {
    let mut game = Game::new(GameConfig::default(), 11, 0).unwrap();
    let piece = Piece::spawn(PieceKind::O, game.board());
    game.set_piece(piece);

    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let snap = game.snapshot();
    let layout = view.layout(&snap, viewport);
    let fb = view.render(&snap, viewport);

    // O spawns at column 3; two terminal columns per cell.
    let cell = fb.get(layout.board.x + 1 + 3 * 2, layout.board.y + 1).unwrap();
    assert_eq!(cell.ch, '█');
    let [r, g, b] = PieceKind::O.color();
    assert_eq!((cell.style.fg.r, cell.style.fg.g, cell.style.fg.b), (r, g, b));
}

#[test]
fn paused_game_shows_overlay() {
    let mut game = Game::new(GameConfig::default(), 11, 0).unwrap();
    game.tick(&TickInput::default().with(GameInput::TogglePause), &mut NullSound);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(100, 30));
    assert!(find(&fb, "PAUSED").is_some());
}

#[test]
fn render_into_reuses_the_buffer() {
    let game = Game::new(GameConfig::default(), 11, 0).unwrap();
    let view = GameView::default();
    let snap = game.snapshot();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, Viewport::new(90, 28), &mut fb);
    let first = fb.clone();
    view.render_into(&snap, Viewport::new(90, 28), &mut fb);
    assert_eq!(fb, first);
    assert_eq!((fb.width(), fb.height()), (90, 28));
}
