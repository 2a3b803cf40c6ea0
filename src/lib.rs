#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod turkish;
pub mod letters;
pub mod board;
pub mod words;
pub mod dictionary;
pub mod powerup;
pub mod rules;
pub mod state;
pub mod error;
pub mod rng;
pub mod hash;
pub mod persist;

pub mod engine {
    pub mod apply;
    pub mod score;
    pub mod turn;
    pub mod validate;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{is_center, tile_kind, BoardState, Tile};
pub use crate::dictionary::{load_word_list, Dictionary, WordList};
pub use crate::engine::apply::{
    accept_game, apply_move, new_game, new_game_with_rng, pass_turn, resolve_timeout, use_powerup,
    MoveOutcome,
};
pub use crate::engine::score::{base_score, score_move, ScoreResult};
pub use crate::engine::turn::{TurnBuilder, TurnPhase};
pub use crate::engine::validate::{validate_move, ValidatedMove};
pub use crate::error::{MoveError, PowerupError, StoreError};
pub use crate::hash::state_fingerprint;
pub use crate::letters::{letter_value, LetterBag, JOKER};
pub use crate::powerup::{Powerup, PowerupKind, RegionBan, RewardEffect};
pub use crate::rng::rng_for_turn;
pub use crate::rules::Rules;
pub use crate::state::{EndReason, GameData, GameStatus, LastMove, Move, Seat};
pub use crate::types::{Orientation, Player, Position, TileKind};
pub use crate::words::{extract_primary_word, find_all_words, find_words_touching, WordRun};
