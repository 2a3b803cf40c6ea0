use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::board::{BoardState, Tile};
use crate::error::StoreError;
use crate::hash::state_fingerprint;
use crate::state::GameData;
use crate::types::Position;

pub const FORMAT_VERSION: u32 = 1;

// Board document form: { "row,col": "A" | "*A", ... }
impl Serialize for BoardState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (pos, tile) in self.iter() {
            map.serialize_entry(&pos.to_string(), &tile.to_string())?;
        }
        map.end()
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = BoardState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of \"row,col\" to letter")
    }

    /// Unparseable entries are skipped, not fatal.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BoardState, A::Error> {
        let mut board = BoardState::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            match (key.parse::<Position>(), value.parse::<Tile>()) {
                (Ok(pos), Ok(tile)) => board.set(pos, tile),
                (Err(e), _) => tracing::warn!(%key, error = %e, "skipping board entry with bad position"),
                (_, Err(e)) => tracing::warn!(%key, %value, error = %e, "skipping board entry with bad tile"),
            }
        }
        Ok(board)
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BoardVisitor)
    }
}

/// Write `game` as a pretty JSON document.
pub fn save_game<P: AsRef<Path>>(path: P, game: &GameData) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(game)?;
    fs::write(path.as_ref(), text)?;
    Ok(())
}

pub fn load_game<P: AsRef<Path>>(path: P) -> Result<GameData, StoreError> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub version: u32,
    pub fingerprint: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    header: SnapshotHeader,
    game: GameData,
}

/// Save `game` as a single bincode blob with a fingerprint header.
pub fn save_snapshot<P: AsRef<Path>>(path: P, game: &GameData) -> Result<(), StoreError> {
    let snap = Snapshot {
        header: SnapshotHeader {
            version: FORMAT_VERSION,
            fingerprint: state_fingerprint(game),
        },
        game: game.clone(),
    };
    let bytes = bincode::serialize(&snap)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Load a snapshot written by [`save_snapshot`], verifying its fingerprint.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<GameData, StoreError> {
    let bytes = fs::read(path.as_ref())?;
    let snap: Snapshot = bincode::deserialize(&bytes)?;
    if snap.header.version != FORMAT_VERSION {
        return Err(StoreError::FormatVersion(snap.header.version));
    }
    let found = state_fingerprint(&snap.game);
    if found != snap.header.fingerprint {
        return Err(StoreError::FingerprintMismatch {
            expected: snap.header.fingerprint,
            found,
        });
    }
    Ok(snap.game)
}

/// Where games live between turns. Writes carry the version they were
/// computed from so two racing moves on one game cannot both land.
pub trait GameStore {
    fn load(&self, game_id: &str) -> Result<GameData, StoreError>;

    /// Replace the stored game. `expected_version` is the version that was
    /// loaded, or `None` for a game that must not exist yet.
    fn save(&mut self, game: &GameData, expected_version: Option<u64>) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    games: BTreeMap<String, GameData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, game_id: &str) -> Result<GameData, StoreError> {
        self.games
            .get(game_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(game_id.to_string()))
    }

    fn save(&mut self, game: &GameData, expected_version: Option<u64>) -> Result<(), StoreError> {
        let current = self.games.get(&game.game_id).map(|g| g.version);
        match (current, expected_version) {
            (None, None) => {}
            (Some(found), Some(expected)) if found == expected => {}
            (found, expected) => {
                tracing::warn!(game_id = %game.game_id, ?found, ?expected, "rejected stale write");
                return Err(StoreError::VersionConflict {
                    expected: expected.unwrap_or(0),
                    found: found.unwrap_or(0),
                });
            }
        }
        self.games.insert(game.game_id.clone(), game.clone());
        Ok(())
    }
}
