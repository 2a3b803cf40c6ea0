use rand::SeedableRng;
use rand_pcg::Pcg64;

use kelime::{
    accept_game, apply_move, new_game_with_rng, validate_move, GameData, Move, MoveError, Player,
    Position, RegionBan, Rules, Tile, TurnBuilder, TurnPhase, WordList,
};

fn pos(r: u8, c: u8) -> Position {
    Position::new(r, c).expect("on board")
}

fn active_game() -> GameData {
    let mut rng = Pcg64::seed_from_u64(7);
    let game = new_game_with_rng("g1", "ali", "ayse", Rules::classic(), 7, 1_000, &mut rng);
    let mut game = accept_game(&game, Player::B, 2_000).expect("accept");
    game.seat_mut(Player::A).rack = "KALEMAZ".chars().collect();
    game.seat_mut(Player::B).rack = "EVİNÇAR".chars().collect();
    game
}

fn dict() -> WordList {
    WordList::from_words(["kalem", "ev", "ke", "ele", "kale"])
}

fn mv(cells: &[(u8, u8, char)]) -> Move {
    Move::from_placements(cells.iter().map(|&(r, c, ch)| (pos(r, c), Tile::letter(ch))))
}

fn kalem() -> Move {
    mv(&[(7, 5, 'K'), (7, 6, 'A'), (7, 7, 'L'), (7, 8, 'E'), (7, 9, 'M')])
}

fn after_kalem() -> GameData {
    let game = active_game();
    let mut rng = Pcg64::seed_from_u64(1);
    let (ns, _) = apply_move(&game, Player::A, &kalem(), &dict(), &mut rng, 3_000).expect("kalem");
    ns
}

#[test]
fn empty_move_rejected() {
    let game = active_game();
    assert_eq!(validate_move(&game, Player::A, &Move::new(), &dict()), Err(MoveError::EmptyMove));
}

#[test]
fn wrong_player_and_inactive_game_rejected() {
    let game = active_game();
    assert_eq!(validate_move(&game, Player::B, &kalem(), &dict()), Err(MoveError::NotYourTurn));

    let mut rng = Pcg64::seed_from_u64(7);
    let pending = new_game_with_rng("g2", "a", "b", Rules::classic(), 7, 0, &mut rng);
    assert_eq!(validate_move(&pending, Player::A, &kalem(), &dict()), Err(MoveError::GameNotActive));
}

#[test]
fn letters_must_come_from_rack() {
    let game = active_game();
    let m = mv(&[(7, 7, 'Ş'), (7, 8, 'U')]);
    assert_eq!(validate_move(&game, Player::A, &m, &dict()), Err(MoveError::LetterNotInRack('Ş')));
    // Only one K on the rack.
    let m = mv(&[(7, 7, 'K'), (7, 8, 'K')]);
    assert_eq!(validate_move(&game, Player::A, &m, &dict()), Err(MoveError::LetterNotInRack('K')));
}

#[test]
fn placements_must_be_in_one_line() {
    let game = active_game();
    let m = mv(&[(7, 7, 'K'), (8, 8, 'A')]);
    assert_eq!(validate_move(&game, Player::A, &m, &dict()), Err(MoveError::NotStraightLine));
}

#[test]
fn gap_in_column_is_not_contiguous() {
    let game = active_game();
    let m = mv(&[(3, 3, 'K'), (5, 3, 'A')]);
    assert_eq!(validate_move(&game, Player::A, &m, &dict()), Err(MoveError::NotContiguous));
}

#[test]
fn first_move_must_cover_center() {
    let game = active_game();
    let m = mv(&[(7, 5, 'K'), (7, 6, 'A')]);
    assert_eq!(
        validate_move(&game, Player::A, &m, &dict()),
        Err(MoveError::FirstMoveMustCoverCenter)
    );
}

#[test]
fn first_move_on_center_scores_plain_sum() {
    let game = active_game();
    let mut rng = Pcg64::seed_from_u64(1);
    let (ns, outcome) = apply_move(&game, Player::A, &kalem(), &dict(), &mut rng, 3_000).expect("kalem");
    // K1 A1 L1 E1 M2, no premium tiles under the word.
    assert_eq!(outcome.score.points, 6);
    assert_eq!(ns.score(Player::A), 6);
    assert_eq!(ns.score(Player::B), 0);
    assert_eq!(ns.turn, Player::B);
    assert_eq!(outcome.word, "KALEM");
    assert_eq!(outcome.words, vec!["kalem".to_string()]);
    let last = ns.last_move.as_ref().expect("last move");
    assert_eq!(last.word, "KALEM");
    assert_eq!(last.points, 6);
    assert_eq!(last.player_id, "ali");
    assert_eq!(ns.board.len(), 5);
    // Rack refilled to seven.
    assert_eq!(ns.seat(Player::A).rack.len(), 7);
    assert_eq!(ns.bag.len(), game.bag.len() - 5);
}

#[test]
fn letter_multiplier_under_new_tile() {
    let game = after_kalem();
    let mut rng = Pcg64::seed_from_u64(2);
    // V on (8,8), a double letter, below E.
    let (ns, outcome) = apply_move(&game, Player::B, &mv(&[(8, 8, 'V')]), &dict(), &mut rng, 4_000)
        .expect("ev");
    assert_eq!(outcome.word, "EV");
    assert_eq!(outcome.score.points, 14);
    assert_eq!(ns.score(Player::B), 14);
    assert_eq!(ns.turn, Player::A);
}

#[test]
fn move_must_touch_existing_letters() {
    let game = after_kalem();
    let m = mv(&[(0, 0, 'E'), (0, 1, 'V')]);
    assert_eq!(validate_move(&game, Player::B, &m, &dict()), Err(MoveError::NotAdjacent));
}

#[test]
fn occupied_cell_rejected() {
    let game = after_kalem();
    let m = mv(&[(7, 7, 'E')]);
    assert_eq!(
        validate_move(&game, Player::B, &m, &dict()),
        Err(MoveError::OccupiedPosition(pos(7, 7)))
    );
}

#[test]
fn unknown_word_rejected_and_state_untouched() {
    let mut game = active_game();
    game.seat_mut(Player::A).rack = "ZZZAAAA".chars().collect();
    let before = game.clone();
    let m = mv(&[(7, 6, 'Z'), (7, 7, 'Z'), (7, 8, 'Z')]);
    let mut rng = Pcg64::seed_from_u64(1);
    let err = apply_move(&game, Player::A, &m, &dict(), &mut rng, 3_000).unwrap_err();
    assert_eq!(err, MoveError::InvalidWords(vec!["zzz".to_string()]));
    assert_eq!(game, before);
    assert!(game.board.is_empty());
    assert_eq!(game.score(Player::A), 0);
}

#[test]
fn every_bad_word_reported_together() {
    let game = after_kalem();
    let m = mv(&[(8, 8, 'N'), (8, 9, 'A')]);
    let err = validate_move(&game, Player::B, &m, &dict()).unwrap_err();
    // Across: "NA"; down: "EN" and "MA".
    match err {
        MoveError::InvalidWords(words) => {
            assert_eq!(words.len(), 3, "{words:?}");
            assert!(words.contains(&"na".to_string()));
            assert!(words.contains(&"en".to_string()));
            assert!(words.contains(&"ma".to_string()));
        }
        other => panic!("expected InvalidWords, got {other:?}"),
    }
}

#[test]
fn empty_dictionary_rejects_everything() {
    let game = active_game();
    let err = validate_move(&game, Player::A, &kalem(), &WordList::new()).unwrap_err();
    assert_eq!(err, MoveError::InvalidWords(vec!["kalem".to_string()]));
}

#[test]
fn lone_letter_is_not_a_word() {
    let game = active_game();
    let err = validate_move(&game, Player::A, &mv(&[(7, 7, 'A')]), &dict()).unwrap_err();
    assert_eq!(err, MoveError::InvalidWords(vec!["a".to_string()]));
}

#[test]
fn region_ban_checked_after_dictionary() {
    let mut game = after_kalem();
    game.seat_mut(Player::B).region_ban = Some(RegionBan::LeftBanned);
    // "KE" down from (7,5): valid word, banned half.
    let m = mv(&[(8, 5, 'E')]);
    assert_eq!(
        validate_move(&game, Player::B, &m, &dict()),
        Err(MoveError::RegionBanned(pos(8, 5)))
    );
    // Invalid word in the banned half reports the dictionary failure first.
    let m = mv(&[(8, 5, 'V')]);
    assert!(matches!(validate_move(&game, Player::B, &m, &dict()), Err(MoveError::InvalidWords(_))));
    // The open half is fine.
    assert!(validate_move(&game, Player::B, &mv(&[(8, 8, 'V')]), &dict()).is_ok());
}

#[test]
fn banned_letter_rejected() {
    let mut game = after_kalem();
    game.seat_mut(Player::B).banned_letters.insert('V');
    assert_eq!(
        validate_move(&game, Player::B, &mv(&[(8, 8, 'V')]), &dict()),
        Err(MoveError::LetterBanned('V'))
    );
}

#[test]
fn joker_scores_zero_and_spends_marker() {
    let mut game = after_kalem();
    game.seat_mut(Player::B).rack = vec!['*', 'E', 'A'];
    let m = Move::from_placements([(pos(8, 8), Tile::joker('V'))]);
    let mut rng = Pcg64::seed_from_u64(5);
    let (ns, outcome) = apply_move(&game, Player::B, &m, &dict(), &mut rng, 4_000).expect("joker ev");
    assert_eq!(outcome.score.points, 0);
    assert!(!ns.seat(Player::B).rack.is_empty());
    assert_eq!(ns.board.get(pos(8, 8)), Some(Tile::joker('V')));
}

#[test]
fn rejection_is_repeatable() {
    let game = active_game();
    let m = mv(&[(3, 3, 'K'), (5, 3, 'A')]);
    let first = validate_move(&game, Player::A, &m, &dict());
    let second = validate_move(&game, Player::A, &m, &dict());
    assert_eq!(first, second);
    assert_eq!(first, Err(MoveError::NotContiguous));
}

#[test]
fn builder_places_withdraws_and_submits() {
    let game = after_kalem();
    let mut turn = TurnBuilder::new(&game, Player::B);
    assert_eq!(turn.phase(), TurnPhase::Empty);

    // First letter must touch the board.
    assert_eq!(turn.place(pos(0, 0), Tile::letter('E')), Err(MoveError::NotAdjacent));
    // Letters not on the rack are refused.
    assert_eq!(turn.place(pos(8, 8), Tile::letter('Z')), Err(MoveError::LetterNotInRack('Z')));

    turn.place(pos(8, 8), Tile::letter('V')).expect("place V");
    assert_eq!(turn.phase(), TurnPhase::LettersPlaced);
    assert_eq!(turn.rack().len(), 6);
    // Later letters stay on the first letter's line.
    assert_eq!(turn.place(pos(9, 9), Tile::letter('E')), Err(MoveError::NotStraightLine));

    turn.place(pos(8, 9), Tile::letter('A')).expect("place A");
    let mut rng = Pcg64::seed_from_u64(9);
    // "VA" is not in the word list: builder keeps its letters.
    assert!(matches!(turn.submit(&dict(), &mut rng, 4_000), Err(MoveError::InvalidWords(_))));
    assert_eq!(turn.pending().len(), 2);

    assert_eq!(turn.withdraw(pos(8, 9)), Some(Tile::letter('A')));
    assert_eq!(turn.rack().len(), 6);
    let (ns, outcome) = turn.submit(&dict(), &mut rng, 4_000).expect("submit EV");
    assert_eq!(outcome.word, "EV");
    assert_eq!(ns.turn, Player::A);

    turn.withdraw_all();
    assert_eq!(turn.phase(), TurnPhase::Empty);
    assert_eq!(turn.rack().len(), 7);
}

#[test]
fn joker_must_stand_for_an_alphabet_letter() {
    let mut game = active_game();
    game.seat_mut(Player::A).rack = "KAL*MAA".chars().collect();
    let words = WordList::from_words(["kalem", "kalwm"]);
    let with_joker = |ch: char| {
        Move::from_placements([
            (pos(7, 5), Tile::letter('K')),
            (pos(7, 6), Tile::letter('A')),
            (pos(7, 7), Tile::letter('L')),
            (pos(7, 8), Tile::joker(ch)),
            (pos(7, 9), Tile::letter('M')),
        ])
    };

    for ch in ['e', 'W', '*'] {
        assert_eq!(
            validate_move(&game, Player::A, &with_joker(ch), &words),
            Err(MoveError::NotInAlphabet(ch))
        );
    }
    // A plain tile showing the joker marker is refused the same way.
    game.seat_mut(Player::A).rack.push('*');
    let marker = mv(&[(7, 7, '*'), (7, 8, 'A')]);
    assert_eq!(validate_move(&game, Player::A, &marker, &words), Err(MoveError::NotInAlphabet('*')));

    let mut rng = Pcg64::seed_from_u64(4);
    let (ns, _) = apply_move(&game, Player::A, &with_joker('E'), &words, &mut rng, 3_000).expect("joker E");
    assert_eq!(ns.board.get(pos(7, 8)), Some(Tile::joker('E')));
}

#[test]
fn builder_refuses_joker_outside_alphabet() {
    let mut game = active_game();
    game.seat_mut(Player::A).rack = "KAL*MAA".chars().collect();
    let mut turn = TurnBuilder::new(&game, Player::A);
    assert_eq!(turn.place(pos(7, 7), Tile::joker('q')), Err(MoveError::NotInAlphabet('q')));
    assert_eq!(turn.phase(), TurnPhase::Empty);
    assert_eq!(turn.rack().len(), 7);
    turn.place(pos(7, 7), Tile::joker('Ş')).expect("joker Ş");
    assert_eq!(turn.rack().len(), 6);
}
