use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 15;

/// Row and column of the center tile.
pub const CENTER: u8 = 7;

/// One of the two seats at the table. A opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Premium class of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Center,
}

impl TileKind {
    #[inline]
    pub fn letter_multiplier(self) -> u32 {
        match self {
            TileKind::DoubleLetter => 2,
            TileKind::TripleLetter => 3,
            _ => 1,
        }
    }

    #[inline]
    pub fn word_multiplier(self) -> u32 {
        match self {
            TileKind::DoubleWord => 2,
            TileKind::TripleWord => 3,
            _ => 1,
        }
    }
}

/// A cell on the board. Always in range; build one with [`Position::new`].
///
/// Ordering is row-major, which is also the placement order used when
/// powerup effects are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn center() -> Self {
        Self { row: CENTER, col: CENTER }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Sort key matching the `row * 100 + col` ordering used for move summaries.
    #[inline]
    pub fn summary_key(self) -> u32 {
        u32::from(self.row) * 100 + u32::from(self.col)
    }

    /// Orthogonal neighbours in [Up, Right, Down, Left] order; `None` means off-board.
    #[inline]
    pub fn neighbors(self) -> [Option<Position>; 4] {
        let up = self.row.checked_sub(1).and_then(|r| Position::new(r, self.col));
        let right = Position::new(self.row, self.col + 1);
        let down = Position::new(self.row + 1, self.col);
        let left = self.col.checked_sub(1).and_then(|c| Position::new(self.row, c));
        [up, right, down, left]
    }

    /// Next cell along `orientation`, or `None` at the edge.
    #[inline]
    pub fn step(self, orientation: Orientation) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => Position::new(self.row, self.col + 1),
            Orientation::Vertical => Position::new(self.row + 1, self.col),
        }
    }

    /// Previous cell along `orientation`, or `None` at the edge.
    #[inline]
    pub fn step_back(self, orientation: Orientation) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => self.col.checked_sub(1).and_then(|c| Position::new(self.row, c)),
            Orientation::Vertical => self.row.checked_sub(1).and_then(|r| Position::new(r, self.col)),
        }
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected \"row,col\", got {0:?}")]
    Malformed(String),
    #[error("position {0},{1} is off the board")]
    OutOfBounds(u32, u32),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses the `"row,col"` encoding used by persisted boards, both parts base-10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePositionError::Malformed(s.to_string());
        let (r, c) = s.split_once(',').ok_or_else(malformed)?;
        let row: u32 = r.trim().parse().map_err(|_| malformed())?;
        let col: u32 = c.trim().parse().map_err(|_| malformed())?;
        u8::try_from(row)
            .ok()
            .zip(u8::try_from(col).ok())
            .and_then(|(r, c)| Position::new(r, c))
            .ok_or(ParsePositionError::OutOfBounds(row, col))
    }
}

impl Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
