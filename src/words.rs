use std::collections::BTreeSet;

use crate::board::BoardState;
use crate::types::{Orientation, Position, BOARD_SIZE};

/// Shortest run of letters that counts as a word.
pub const MIN_WORD_LEN: usize = 2;

/// A maximal horizontal or vertical run of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRun {
    pub text: String,
    pub orientation: Orientation,
    pub start: Position,
    pub len: usize,
}

impl WordRun {
    /// Cells covered by the run, from `start` onward.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let orientation = self.orientation;
        std::iter::successors(Some(self.start), move |p| p.step(orientation)).take(self.len)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|p| p == pos)
    }
}

/// Every maximal run of at least `min_len` letters, rows first then columns.
pub fn find_runs(board: &BoardState, min_len: usize) -> Vec<WordRun> {
    let mut runs = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for line in 0..BOARD_SIZE {
            scan_line(board, orientation, line, min_len, &mut runs);
        }
    }
    runs
}

fn scan_line(
    board: &BoardState,
    orientation: Orientation,
    line: u8,
    min_len: usize,
    out: &mut Vec<WordRun>,
) {
    let at = |i: u8| match orientation {
        Orientation::Horizontal => Position::new(line, i),
        Orientation::Vertical => Position::new(i, line),
    };
    let mut current: Option<(Position, String, usize)> = None;
    for i in 0..=BOARD_SIZE {
        let cell = at(i);
        match cell.and_then(|p| board.letter_at(p).map(|ch| (p, ch))) {
            Some((p, ch)) => match current {
                Some((_, ref mut text, ref mut len)) => {
                    text.push(ch);
                    *len += 1;
                }
                None => current = Some((p, ch.to_string(), 1)),
            },
            None => {
                if let Some((start, text, len)) = current.take() {
                    if len >= min_len {
                        out.push(WordRun { text, orientation, start, len });
                    }
                }
            }
        }
    }
}

/// Text of every word currently on the board.
pub fn find_all_words(board: &BoardState) -> BTreeSet<String> {
    find_runs(board, MIN_WORD_LEN).into_iter().map(|r| r.text).collect()
}

/// Words whose cells include at least one of `positions`.
pub fn find_words_touching(board: &BoardState, positions: &[Position]) -> Vec<WordRun> {
    find_runs(board, MIN_WORD_LEN)
        .into_iter()
        .filter(|run| positions.iter().any(|p| run.contains(*p)))
        .collect()
}

/// Shared line of `positions`, if they are collinear. A single position has
/// no line of its own and yields `None`.
pub fn shared_orientation(positions: &[Position]) -> Option<Orientation> {
    let first = positions.first()?;
    if positions.len() < 2 {
        return None;
    }
    if positions.iter().all(|p| p.row() == first.row()) {
        Some(Orientation::Horizontal)
    } else if positions.iter().all(|p| p.col() == first.col()) {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

/// Walk outward from the extremes of `positions` along their shared line
/// through occupied cells and return the covered text.
///
/// For a single position the longer of the two directions wins, horizontal
/// on a tie. Returns an empty string for empty or non-collinear input.
pub fn extract_primary_word(board: &BoardState, positions: &[Position]) -> String {
    match positions {
        [] => String::new(),
        [only] => {
            let h = run_through(board, *only, *only, Orientation::Horizontal);
            let v = run_through(board, *only, *only, Orientation::Vertical);
            if v.chars().count() > h.chars().count() {
                v
            } else {
                h
            }
        }
        _ => match shared_orientation(positions) {
            Some(orientation) => {
                let min = positions.iter().min().copied();
                let max = positions.iter().max().copied();
                match (min, max) {
                    (Some(lo), Some(hi)) => run_through(board, lo, hi, orientation),
                    _ => String::new(),
                }
            }
            None => String::new(),
        },
    }
}

fn run_through(board: &BoardState, lo: Position, hi: Position, orientation: Orientation) -> String {
    let mut start = lo;
    while let Some(prev) = start.step_back(orientation) {
        if !board.is_occupied(prev) {
            break;
        }
        start = prev;
    }
    let mut text = String::new();
    let mut cursor = Some(start);
    while let Some(p) = cursor {
        match board.letter_at(p) {
            Some(ch) => text.push(ch),
            // Gaps before `hi` are the validator's problem; stop at the first hole past it.
            None if p > hi => break,
            None => {}
        }
        cursor = p.step(orientation);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    fn pos(r: u8, c: u8) -> Position {
        Position::new(r, c).unwrap()
    }

    #[test]
    fn run_contains_checks_both_axes() {
        let run = WordRun {
            text: "ABC".into(),
            orientation: Orientation::Vertical,
            start: pos(2, 4),
            len: 3,
        };
        assert!(run.contains(pos(4, 4)));
        assert!(!run.contains(pos(5, 4)));
        assert!(!run.contains(pos(3, 5)));
        assert_eq!(run.cells().collect::<Vec<_>>(), vec![pos(2, 4), pos(3, 4), pos(4, 4)]);
    }

    #[test]
    fn runs_touching_board_edge_are_closed() {
        let mut b = BoardState::new();
        b.set(pos(0, 13), Tile::letter('O'));
        b.set(pos(0, 14), Tile::letter('L'));
        let runs = find_runs(&b, MIN_WORD_LEN);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "OL");
        assert_eq!(runs[0].start, pos(0, 13));
    }
}
