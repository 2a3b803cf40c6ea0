use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::letters::{is_alphabet_letter, letter_value, JOKER};
use crate::turkish::upper_char;
use crate::types::{Position, TileKind, BOARD_SIZE, CENTER};

// Premium layout, row-major. Legend:
// '.' normal, 'd' double letter, 't' triple letter,
// 'D' double word, 'T' triple word, '*' center.
const LAYOUT: [&[u8; 15]; 15] = [
    b"T..d...T...d..T",
    b".D...t...t...D.",
    b"..D...d.d...D..",
    b"d..D...d...D..d",
    b"....D.....D....",
    b".t...t...t...t.",
    b"..d...d.d...d..",
    b"T..d...*...d..T",
    b"..d...d.d...d..",
    b".t...t...t...t.",
    b"....D.....D....",
    b"d..D...d...D..d",
    b"..D...d.d...D..",
    b".D...t...t...D.",
    b"T..d...T...d..T",
];

#[inline]
const fn kind_from_code(code: u8) -> TileKind {
    match code {
        b'd' => TileKind::DoubleLetter,
        b't' => TileKind::TripleLetter,
        b'D' => TileKind::DoubleWord,
        b'T' => TileKind::TripleWord,
        b'*' => TileKind::Center,
        _ => TileKind::Normal,
    }
}

/// Premium class of `(row, col)`. Off-board coordinates are `Normal`.
#[inline]
pub fn tile_kind(row: i32, col: i32) -> TileKind {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) => Position::new(r, c).map_or(TileKind::Normal, tile_kind_at),
        _ => TileKind::Normal,
    }
}

#[inline]
pub fn tile_kind_at(pos: Position) -> TileKind {
    kind_from_code(LAYOUT[usize::from(pos.row())][usize::from(pos.col())])
}

#[inline]
pub fn is_center(row: i32, col: i32) -> bool {
    row == i32::from(CENTER) && col == i32::from(CENTER)
}

/// A letter sitting on the board. A joker keeps the letter it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: char,
    pub joker: bool,
}

impl Tile {
    #[inline]
    pub fn letter(letter: char) -> Self {
        Self { letter, joker: false }
    }

    #[inline]
    pub fn joker(letter: char) -> Self {
        Self { letter, joker: true }
    }

    /// Points this tile is worth before multipliers.
    #[inline]
    pub fn value(self) -> u32 {
        if self.joker {
            0
        } else {
            letter_value(self.letter)
        }
    }

    /// Rack symbol consumed when this tile is placed.
    #[inline]
    pub fn rack_symbol(self) -> char {
        if self.joker {
            JOKER
        } else {
            self.letter
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.joker {
            write!(f, "{JOKER}{}", self.letter)
        } else {
            write!(f, "{}", self.letter)
        }
    }
}

impl FromStr for Tile {
    type Err = String;

    /// `"A"` for a letter, `"*A"` for a joker standing for `A`. Lowercase
    /// input is folded with the Turkish table; anything outside the
    /// alphabet is refused.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (joker, letter) = match (chars.next(), chars.next(), chars.next()) {
            (Some(JOKER), Some(l), None) => (true, upper_char(l)),
            (Some(l), None, None) => (false, upper_char(l)),
            _ => return Err(format!("invalid tile {s:?}")),
        };
        if !is_alphabet_letter(letter) {
            return Err(format!("invalid tile {s:?}: not a letter of the alphabet"));
        }
        Ok(Tile { letter, joker })
    }
}

/// Letters committed to the board so far. Only grows between games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tiles: BTreeMap<Position, Tile>,
}

impl BoardState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(&pos).copied()
    }

    #[inline]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.tiles.get(&pos).map(|t| t.letter)
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.tiles.contains_key(&pos)
    }

    #[inline]
    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.tiles.insert(pos, tile);
    }

    #[inline]
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        self.tiles.remove(&pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles.iter().map(|(p, t)| (*p, *t))
    }

    /// Whether any orthogonal neighbour of `pos` holds a letter.
    #[inline]
    pub fn has_neighbor(&self, pos: Position) -> bool {
        pos.neighbors().iter().flatten().any(|n| self.is_occupied(*n))
    }

    /// Copy of this board with `placements` laid on top.
    pub fn with_placements<'a, I>(&self, placements: I) -> BoardState
    where
        I: IntoIterator<Item = (&'a Position, &'a Tile)>,
    {
        let mut merged = self.clone();
        for (p, t) in placements {
            merged.set(*p, *t);
        }
        merged
    }

    /// Text grid, one row per line, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(16 * usize::from(BOARD_SIZE));
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = Position::new(row, col)
                    .and_then(|p| self.letter_at(p))
                    .unwrap_or('.');
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
