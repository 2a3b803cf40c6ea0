use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Tile};
use crate::letters::LetterBag;
use crate::powerup::{Powerup, PowerupKind, RegionBan};
use crate::rules::Rules;
use crate::types::{Player, Position};

/// Letters placed by the acting player this turn, not yet on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Move {
    placements: BTreeMap<Position, Tile>,
}

impl Move {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_placements<I: IntoIterator<Item = (Position, Tile)>>(placements: I) -> Self {
        Self {
            placements: placements.into_iter().collect(),
        }
    }

    /// Put `tile` on `pos`, returning whatever this move had there before.
    #[inline]
    pub fn place(&mut self, pos: Position, tile: Tile) -> Option<Tile> {
        self.placements.insert(pos, tile)
    }

    #[inline]
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        self.placements.remove(&pos)
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.placements.get(&pos).copied()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placed positions in row-major order.
    pub fn positions(&self) -> Vec<Position> {
        self.placements.keys().copied().collect()
    }

    /// Placements in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.placements.iter().map(|(p, t)| (*p, *t))
    }

    #[inline]
    pub(crate) fn placements(&self) -> &BTreeMap<Position, Tile> {
        &self.placements
    }

    /// Letters of this move ordered by `row * 100 + col`. A display summary,
    /// not necessarily the word formed on the board.
    pub fn summary_word(&self) -> String {
        let mut cells: Vec<(u32, char)> = self
            .placements
            .iter()
            .map(|(p, t)| (p.summary_key(), t.letter))
            .collect();
        cells.sort_by_key(|(k, _)| *k);
        cells.into_iter().map(|(_, c)| c).collect()
    }
}

/// Everything the game tracks for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub score: u32,
    pub rack: Vec<char>,
    /// Collected, unspent rewards.
    pub inventory: Vec<PowerupKind>,
    /// Letters frozen for this player's next turn.
    pub banned_letters: BTreeSet<char>,
    pub region_ban: Option<RegionBan>,
    /// Keeps the turn after the next committed move.
    pub extra_move: bool,
}

impl Seat {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Drop one-turn restrictions once this player's turn is over.
    #[inline]
    pub fn clear_bans(&mut self) {
        self.banned_letters.clear();
        self.region_ban = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    TilesExhausted,
    Passes,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created, waiting for the invited player to accept.
    Pending,
    Active,
    Completed {
        winner: Option<Player>,
        reason: EndReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub player: Player,
    pub player_id: String,
    pub word: String,
    pub points: u32,
    pub timestamp: u64,
}

/// The persisted unit: one full game between two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub game_id: String,
    pub rules: Rules,
    pub seed: u64,
    pub status: GameStatus,
    pub board: BoardState,
    pub turn: Player,
    pub turn_number: u32,
    pub seats: [Seat; 2],
    pub bag: LetterBag,
    pub powerups: Vec<Powerup>,
    pub last_move: Option<LastMove>,
    pub consecutive_passes: u8,
    pub created_at: u64,
    /// Milliseconds since the epoch; strictly increases with every commit.
    pub updated_at: u64,
    /// Bumped on every commit, for optimistic concurrency in the store.
    pub version: u64,
}

impl GameData {
    #[inline]
    pub fn seat(&self, player: Player) -> &Seat {
        &self.seats[player.index()]
    }

    #[inline]
    pub fn seat_mut(&mut self, player: Player) -> &mut Seat {
        &mut self.seats[player.index()]
    }

    #[inline]
    pub fn score(&self, player: Player) -> u32 {
        self.seat(player).score
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Seat holding `id`, if it plays in this game.
    pub fn player_by_id(&self, id: &str) -> Option<Player> {
        [Player::A, Player::B].into_iter().find(|p| self.seat(*p).id == id)
    }

    /// Higher score wins; equal scores are a draw.
    pub fn leader(&self) -> Option<Player> {
        let (a, b) = (self.score(Player::A), self.score(Player::B));
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Record a commit at `now`, keeping `updated_at` monotonic.
    pub(crate) fn touch(&mut self, now: u64) {
        self.updated_at = now.max(self.updated_at.saturating_add(1));
        self.version += 1;
    }
}
