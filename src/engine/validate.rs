use std::collections::BTreeMap;

use crate::board::BoardState;
use crate::dictionary::Dictionary;
use crate::error::MoveError;
use crate::letters::is_alphabet_letter;
use crate::state::{GameData, Move, Seat};
use crate::turkish::normalize_word;
use crate::types::{Player, Position};
use crate::words::{extract_primary_word, find_words_touching, shared_orientation, MIN_WORD_LEN};

/// A move that passed every rule, with what was learned along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMove {
    /// Placed positions, row-major.
    pub positions: Vec<Position>,
    /// Main word through the placements, as it reads on the board.
    pub primary_word: String,
    /// Every normalized word the move formed or extended.
    pub words: Vec<String>,
    pub first_move: bool,
}

/// Check `mv` by `player` against `game`. Rules run in a fixed order and
/// the first failure is returned; `game` is never modified.
pub fn validate_move<D: Dictionary + ?Sized>(
    game: &GameData,
    player: Player,
    mv: &Move,
    dict: &D,
) -> Result<ValidatedMove, MoveError> {
    if !game.is_active() {
        return Err(MoveError::GameNotActive);
    }
    if game.turn != player {
        return Err(MoveError::NotYourTurn);
    }
    if mv.is_empty() {
        return Err(MoveError::EmptyMove);
    }
    let seat = game.seat(player);
    check_placements(&game.board, seat, mv)?;

    let positions = mv.positions();
    check_straight_line(&positions)?;
    check_contiguous(&game.board, mv, &positions)?;

    let first_move = game.board.is_empty();
    if first_move {
        if !positions.contains(&Position::center()) {
            tracing::debug!(?positions, "first move misses center");
            return Err(MoveError::FirstMoveMustCoverCenter);
        }
    } else if !positions.iter().any(|p| game.board.has_neighbor(*p)) {
        tracing::debug!(?positions, "move does not touch the board");
        return Err(MoveError::NotAdjacent);
    }

    let merged = game.board.with_placements(mv.placements());
    let (primary_word, words) = check_words(&merged, &positions, dict)?;

    if let Some(ban) = seat.region_ban {
        if let Some(p) = positions.iter().find(|p| !ban.allows(**p)) {
            return Err(MoveError::RegionBanned(*p));
        }
    }
    if let Some(ch) = mv
        .iter()
        .map(|(_, t)| t.rack_symbol())
        .find(|c| seat.banned_letters.contains(c))
    {
        return Err(MoveError::LetterBanned(ch));
    }

    tracing::debug!(?player, word = %primary_word, "move validated");
    Ok(ValidatedMove {
        positions,
        primary_word,
        words,
        first_move,
    })
}

/// Cells must be free, every tile must show a letter of the alphabet (a
/// joker included) and must come off the player's rack.
fn check_placements(board: &BoardState, seat: &Seat, mv: &Move) -> Result<(), MoveError> {
    let mut available: BTreeMap<char, usize> = BTreeMap::new();
    for ch in &seat.rack {
        *available.entry(*ch).or_default() += 1;
    }
    for (pos, tile) in mv.iter() {
        if board.is_occupied(pos) {
            return Err(MoveError::OccupiedPosition(pos));
        }
        if !is_alphabet_letter(tile.letter) {
            return Err(MoveError::NotInAlphabet(tile.letter));
        }
        let symbol = tile.rack_symbol();
        match available.get_mut(&symbol) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return Err(MoveError::LetterNotInRack(symbol)),
        }
    }
    Ok(())
}

fn check_straight_line(positions: &[Position]) -> Result<(), MoveError> {
    if positions.len() < 2 || shared_orientation(positions).is_some() {
        Ok(())
    } else {
        Err(MoveError::NotStraightLine)
    }
}

/// Every cell between the first and last placement must hold a letter,
/// either from this move or from the board.
fn check_contiguous(board: &BoardState, mv: &Move, positions: &[Position]) -> Result<(), MoveError> {
    let Some(orientation) = shared_orientation(positions) else {
        return Ok(());
    };
    let (Some(&lo), Some(&hi)) = (positions.first(), positions.last()) else {
        return Ok(());
    };
    let mut cursor = Some(lo);
    while let Some(p) = cursor {
        if p > hi {
            break;
        }
        if mv.get(p).is_none() && !board.is_occupied(p) {
            tracing::debug!(gap = %p, "gap in placed line");
            return Err(MoveError::NotContiguous);
        }
        cursor = p.step(orientation);
    }
    Ok(())
}

/// Look up every word the move touches plus its primary word. All misses
/// are reported together, normalized, in board order.
fn check_words<D: Dictionary + ?Sized>(
    merged: &BoardState,
    positions: &[Position],
    dict: &D,
) -> Result<(String, Vec<String>), MoveError> {
    let primary = extract_primary_word(merged, positions);
    let mut candidates: Vec<String> = find_words_touching(merged, positions)
        .into_iter()
        .map(|run| run.text)
        .collect();
    if primary.chars().count() >= MIN_WORD_LEN {
        candidates.push(primary.clone());
    }
    if candidates.is_empty() {
        // A lone letter with nothing around it is not a word.
        return Err(MoveError::InvalidWords(vec![normalize_word(&primary)]));
    }

    let mut words: Vec<String> = Vec::with_capacity(candidates.len());
    for text in &candidates {
        let n = normalize_word(text);
        if !words.contains(&n) {
            words.push(n);
        }
    }
    let invalid: Vec<String> = words
        .iter()
        .filter(|w| !dict.is_valid_word(w))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        tracing::debug!(?invalid, "dictionary rejected words");
        return Err(MoveError::InvalidWords(invalid));
    }
    Ok((primary, words))
}
