use lib::tablut::*;
use proptest::sample::Selector;
use test_strategy::proptest;

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn packing_an_unpacked_template_is_an_identity() {
    assert_eq!(Board::unpack(&Snapshot::ASHTON).map(|b| b.snapshot()), Ok(Snapshot::ASHTON));
    assert_eq!(Snapshot::ASHTON.to_string().parse(), Ok(Snapshot::ASHTON));
}

#[proptest(cases = 32)]
fn random_games_keep_at_most_one_king(#[strategy(1..256usize)] plies: usize, selector: Selector) {
    let mut game = Game::<Board>::default();

    for _ in 0..plies {
        let moves: Vec<_> = game.board().moves(game.turn()).collect();
        if moves.is_empty() || game.outcome().is_some() {
            break;
        }

        let m = selector.select(moves);
        let side = game.turn();
        let report = game.execute(side, m)?;

        assert!(game.board().count(Role::King) <= 1);
        assert!(!game.board().is_legal(side, m));
        assert_eq!(report.outcome, game.outcome());
    }
}

#[test]
fn black_may_leave_its_camp() {
    let mut game = Game::<Board>::default();
    game.white_move(mv("e3g3")).unwrap();

    let report = game.black_move(mv("d1d2")).unwrap();
    assert_eq!(report, Report::default());

    let attacker = game.board().piece(sq("d2")).unwrap();
    assert_eq!(attacker.role(), Role::Attacker);
    assert!(attacker.is_exiled());
    assert_eq!(game.board().piece(sq("d1")), None);
}

#[test]
fn two_attackers_capture_a_defender_in_between() {
    let mut game = Game::<Board>::default();

    assert_eq!(game.white_move(mv("e3g3")).map(|r| r.captures.count()), Ok(0));
    assert_eq!(game.black_move(mv("a4c4")).map(|r| r.captures.count()), Ok(0));
    assert_eq!(game.white_move(mv("g3g2")).map(|r| r.captures.count()), Ok(0));

    let report = game.black_move(mv("a6c6")).unwrap();
    assert_eq!(report.captures.squares(), &[sq("c5")]);
    assert_eq!(game.board().piece(sq("c5")), None);
    assert_eq!(game.board().count(Role::Defender), 7);
}

#[test]
fn the_king_in_the_castle_is_captured_once_surrounded() {
    let mut board = Board::default();

    for s in ["e4", "e6", "d5", "f5", "g5"] {
        board.remove(sq(s)).unwrap();
    }

    for s in ["e4", "e6", "d5"] {
        board.place(sq(s), Piece::Attacker { camp: None, exiled: true }).unwrap();
    }

    assert_eq!(board.king(), Some(sq("e5")));

    let report = board.play(Side::Black, mv("h5f5"), false).unwrap();
    assert!(report.captures.is_king_captured());
    assert_eq!(report.outcome, Some(Outcome::Capture));
    assert_eq!(board.king(), None);
}

#[test]
fn the_king_escapes() {
    let mut board = Board::default();
    board.remove(sq("e4")).unwrap();
    board.remove(sq("e3")).unwrap();

    let mut game = Game::new(board);
    assert_eq!(game.white_move(mv("e5e3")).map(|r| r.outcome), Ok(None));
    assert_eq!(game.black_move(mv("a4b4")).map(|r| r.outcome), Ok(None));
    assert_eq!(
        game.white_move(mv("e3i3")).map(|r| r.outcome),
        Ok(Some(Outcome::Escape))
    );

    assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Side::White));
    assert_eq!(
        game.black_move(mv("b4b3")),
        Err(GameError::GameHasEnded(Outcome::Escape))
    );
}

#[test]
fn repeating_a_position_draws() {
    let mut game = Game::<Board>::default();

    for (i, m) in ["d5d4", "d1d2", "d4d5", "d2c2", "d5d4"].into_iter().enumerate() {
        let side = if i % 2 == 0 { Side::White } else { Side::Black };
        assert_eq!(game.execute(side, mv(m)).map(|r| r.outcome), Ok(None));
    }

    assert_eq!(
        game.black_move(mv("c2d2")).map(|r| r.outcome),
        Ok(Some(Outcome::Repetition))
    );

    assert!(game.outcome().map_or(false, |o| o.is_draw()));
    assert_eq!(game.board().history().len(), 7);
}

#[test]
fn rejected_moves_keep_the_turn() {
    let mut game = Game::<Board>::default();

    assert_eq!(
        game.white_move(mv("e3e1")),
        Err(GameError::InvalidMove(StepError::Illegal(IllegalMove(
            mv("e3e1"),
            Reason::Occupied
        ))))
    );

    assert_eq!(
        game.black_move(mv("d1d2")),
        Err(GameError::TurnOfTheOpponent(Side::Black))
    );

    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.board().history(), &[Snapshot::ASHTON]);
}

#[test]
fn speculative_copies_do_not_affect_the_original() {
    let board = Board::default();
    let mut speculative = board.clone();

    speculative.play(Side::White, mv("e3c3"), false).unwrap();
    assert_eq!(board, Board::default());
    assert_ne!(speculative.snapshot(), board.snapshot());
}
