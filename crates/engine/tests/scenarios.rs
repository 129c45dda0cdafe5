use engine::{Color, Engine, GameState, MoveRejection, PieceKind, Position, Setup, SetupError, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn setup(turn: Color, layout: &[(char, &str)]) -> Setup {
    layout.iter().fold(Setup::empty(turn), |setup, &(c, at)| {
        let (color, kind) = PieceKind::from_char(c).unwrap();
        setup.place(color, kind, sq(at))
    })
}

fn engine(turn: Color, layout: &[(char, &str)]) -> Engine {
    Engine::from_setup(&setup(turn, layout)).unwrap()
}

#[test]
fn cannon_capture_without_screen_is_rejected() {
    let mut game = Engine::new();
    let before = game.board_snapshot();

    assert!(!game.make_move("b3", "b8"));
    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.current_turn(), Color::Red);
}

#[test]
fn central_cannon_opening_is_accepted() {
    let mut game = Engine::new();
    assert!(game.make_move("b3", "e3"));
    let cannon = game.piece_at(sq("e3")).unwrap();
    assert_eq!((cannon.color, cannon.kind), (Color::Red, PieceKind::Cannon));
    assert_eq!(game.current_turn(), Color::Black);
}

#[test]
fn cannon_captures_over_one_screen() {
    let mut game = Engine::new();
    assert!(!game.make_move("h3", "h8"));
    assert!(game.make_move("h3", "h10"));
    assert_eq!(game.pieces(Color::Black).count(), 15);

    let mut game = engine(
        Color::Red,
        &[('G', "d1"), ('C', "h3"), ('S', "h5"), ('g', "f10"), ('r', "h8")],
    );
    let rook = game.board().id_at(sq("h8")).unwrap();

    assert!(game.make_move("h3", "h8"));
    assert_eq!(game.board().piece(rook).position, Position::Captured);
    assert_eq!(game.pieces(Color::Black).count(), 1);
    assert!(game.legal_moves(Color::Black).all(|mv| mv.from == sq("f10")));
}

#[test]
fn move_creating_face_off_is_rejected() {
    let mut game = engine(Color::Red, &[('G', "d1"), ('R', "a5"), ('g', "e10")]);
    let before = game.board().clone();

    assert_eq!(game.try_move(sq("d1"), sq("e1")), Err(MoveRejection::IllegalShape(PieceKind::General)));
    assert!(!game.make_move("d1", "e1"));
    assert_eq!(game.board(), &before);
    assert!(!game.legal_moves_from(sq("d1")).contains(&sq("e1")));
}

#[test]
fn removing_the_last_screen_is_rejected() {
    let mut game = engine(Color::Red, &[('G', "e1"), ('K', "e5"), ('g', "e10")]);
    let before = game.board().clone();

    assert_eq!(game.try_move(sq("e5"), sq("c6")), Err(MoveRejection::GeneralsFacing));
    assert_eq!(game.board(), &before);
    assert!(game.make_move("e1", "d1"));
    assert!(!game.generals_facing());
}

#[test]
fn soldier_unlocks_sideways_after_crossing() {
    let mut game = engine(Color::Red, &[('G', "e1"), ('S', "c5"), ('g', "f10")]);

    assert!(!game.make_move("c5", "b5"));
    assert!(game.make_move("c5", "c6"));
    assert!(game.piece_at(sq("c6")).unwrap().crossed_river);

    assert!(game.make_move("f10", "f9"));
    assert!(game.make_move("c6", "b6"));
    assert!(game.piece_at(sq("b6")).unwrap().crossed_river);
}

#[test]
fn black_soldier_crosses_downward() {
    let mut game = engine(Color::Black, &[('G', "d1"), ('s', "g6"), ('g', "e10")]);

    assert!(!game.make_move("g6", "h6"));
    assert!(game.make_move("g6", "g5"));
    assert!(game.piece_at(sq("g5")).unwrap().crossed_river);
    assert!(game.make_move("d1", "d2"));
    assert!(game.make_move("g5", "h5"));
}

#[test]
fn checkmate_ends_the_game() {
    let mut game = engine(Color::Red, &[('G', "d1"), ('R', "a8"), ('R', "b9"), ('g', "e10")]);

    assert!(game.make_move("a8", "a10"));
    assert_eq!(game.game_state(), GameState::RedWon);
    assert!(game.is_in_check(Color::Black));
    assert!(!game.has_legal_moves(Color::Black));
}

#[test]
fn stalemate_is_a_loss() {
    let mut game = engine(Color::Red, &[('G', "d1"), ('R', "a8"), ('R', "f2"), ('g', "e10")]);

    assert!(game.make_move("a8", "a9"));
    assert_eq!(game.game_state(), GameState::RedWon);
    assert!(!game.is_in_check(Color::Black));
}

#[test]
fn black_can_win_too() {
    let mut game = engine(Color::Black, &[('G', "e1"), ('r', "i3"), ('r', "h2"), ('g', "d10")]);

    assert!(game.make_move("i3", "i1"));
    assert_eq!(game.game_state(), GameState::BlackWon);
}

#[test]
fn finished_game_rejects_everything() {
    let mut game = engine(Color::Red, &[('G', "d1"), ('R', "a8"), ('R', "b9"), ('g', "e10")]);
    assert!(game.make_move("a8", "a10"));
    let before = game.board().clone();
    let turn = game.current_turn();

    assert_eq!(game.try_move(sq("e10"), sq("e9")), Err(MoveRejection::GameOver));
    assert!(!game.make_move("a10", "a1"));
    assert!(!game.legal_move(sq("b9"), sq("b1")));
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_turn(), turn);
    assert_eq!(game.game_state(), GameState::RedWon);
}

#[test]
fn setup_without_moves_is_already_decided() {
    let game = engine(Color::Black, &[('G', "d1"), ('R', "a9"), ('R', "f2"), ('g', "e10")]);
    assert_eq!(game.game_state(), GameState::RedWon);
}

#[test]
fn invalid_setups_are_refused() {
    let facing = setup(Color::Red, &[('G', "e1"), ('g', "e10")]);
    assert_eq!(Engine::from_setup(&facing).err(), Some(SetupError::GeneralsFacing));

    let waiting_in_check = setup(Color::Red, &[('G', "d1"), ('R', "e5"), ('g', "e10")]);
    assert_eq!(
        Engine::from_setup(&waiting_in_check).err(),
        Some(SetupError::WaitingSideInCheck(Color::Black))
    );
}

#[test]
fn self_check_is_rejected() {
    // The red rook on e3 pins itself to its general.
    let mut game = engine(Color::Red, &[('G', "e1"), ('R', "e3"), ('r', "e8"), ('g', "d10")]);

    assert_eq!(game.try_move(sq("e3"), sq("a3")), Err(MoveRejection::SelfCheck(Color::Red)));
    assert!(game.make_move("e3", "e8"));
    assert_eq!(game.pieces(Color::Black).count(), 1);
}
