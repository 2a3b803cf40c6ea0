use thiserror::Error;

use crate::powerup::PowerupKind;
use crate::types::Position;

/// Why a submitted move was refused. The game is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is not in progress")]
    GameNotActive,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("no letters placed")]
    EmptyMove,
    #[error("position {0} is already occupied")]
    OccupiedPosition(Position),
    #[error("letter {0:?} is not on the rack")]
    LetterNotInRack(char),
    #[error("{0:?} is not a letter of the alphabet")]
    NotInAlphabet(char),
    #[error("letters must share one row or one column")]
    NotStraightLine,
    #[error("letters must form a gap-free line")]
    NotContiguous,
    #[error("the first move must cover the center tile")]
    FirstMoveMustCoverCenter,
    #[error("letters must connect to a letter already on the board")]
    NotAdjacent,
    #[error("not in the dictionary: {}", .0.join(", "))]
    InvalidWords(Vec<String>),
    #[error("position {0} is in the banned half of the board")]
    RegionBanned(Position),
    #[error("letter {0:?} is frozen this turn")]
    LetterBanned(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerupError {
    #[error("game is not in progress")]
    GameNotActive,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("you don't have this powerup: {0:?}")]
    PowerupUnavailable(PowerupKind),
    #[error("{0:?} is a mine and cannot be used")]
    NotAReward(PowerupKind),
    #[error("opponent needs at least 2 letters on the rack")]
    InsufficientOpponentLetters,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("unsupported snapshot format version {0}")]
    FormatVersion(u32),
    #[error("snapshot fingerprint mismatch: header {expected:032x}, content {found:032x}")]
    FingerprintMismatch { expected: u128, found: u128 },
    #[error("stale write: expected version {expected}, store has {found}")]
    VersionConflict { expected: u64, found: u64 },
    #[error("game {0} not found")]
    NotFound(String),
}
