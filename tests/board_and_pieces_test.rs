use geometric_rain::core::{
    horizontal_collision, process_completed_rows, vertical_collision, Board, Contact, GameConfig,
    Piece, Scorekeeper, Shape,
};
use geometric_rain::types::PieceKind;

#[test]
fn every_kind_spawns_on_the_top_rows_inside_the_grid() {
    let board = Board::new(10, 20);
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, &board);
        assert!(!piece.is_game_over(), "{kind:?}");
        let (w, h) = kind.footprint();
        let cells = piece.cells();
        assert_eq!(cells.len(), 4);
        let min_x = cells.iter().map(|c| c.0).min().unwrap();
        let max_x = cells.iter().map(|c| c.0).max().unwrap();
        let max_y = cells.iter().map(|c| c.1).max().unwrap();
        assert_eq!(min_x, kind.spawn_column(), "{kind:?}");
        assert_eq!((max_x - min_x + 1) as u8, w, "{kind:?}");
        assert!(max_y < h as i8 + 1, "{kind:?}");
    }
}

#[test]
fn piece_walks_to_each_wall_and_stops() {
    let board = Board::new(10, 20);
    let mut piece = Piece::spawn(PieceKind::T, &board);

    while piece.move_by(-1, 0, &board) {}
    let min_x = piece.cells().iter().map(|c| c.0).min().unwrap();
    assert_eq!(min_x, 0);
    assert!(!piece.move_by(-1, 0, &board));

    while piece.move_by(1, 0, &board) {}
    let max_x = piece.cells().iter().map(|c| c.0).max().unwrap();
    assert_eq!(max_x, 9);
}

#[test]
fn piece_lands_on_the_stack() {
    let mut board = Board::new(10, 20);
    for x in 0..10 {
        board.set(x, 19, Some(PieceKind::S));
    }
    let mut piece = Piece::spawn(PieceKind::O, &board);
    while piece.move_by(0, 1, &board) {}
    assert!(piece.is_settled());
    let max_y = piece.cells().iter().map(|c| c.1).max().unwrap();
    assert_eq!(max_y, 18);

    // Landed cells sit directly on the stack and do not collide in place.
    assert_eq!(vertical_collision(&board, &piece.cells()), Contact::Clear);
    assert!(!horizontal_collision(&board, &piece.cells()));
}

#[test]
fn shape_rotation_cycles() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        assert_eq!(shape.rotated(4), shape, "{kind:?}");
        assert_eq!(shape.rotated(1).rotated(3), shape, "{kind:?}");
    }
}

#[test]
fn four_row_clear_pays_top_reward_and_compacts() {
    let mut board = Board::from_rows(4, 6, &["....", ".T..", "IIII", "IIII", "IIII", "IIII"]);
    let mut keeper = Scorekeeper::new(0);
    let config = GameConfig::default();

    let report = process_completed_rows(&mut board, &mut keeper, &config);
    assert_eq!(report.rows, 4);
    assert_eq!(report.points, 1200);
    assert_eq!(board.block_count(), 1);
    assert_eq!(board.get(1, 5), Some(Some(PieceKind::T)));
}
