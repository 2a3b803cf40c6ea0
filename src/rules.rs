use serde::{Deserialize, Serialize};

/// Per-game configuration, stored with the game so a persisted document is
/// self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pub rack_size: u8,
    pub powerups: bool,
    /// Seconds the player on turn has before the opponent may claim the game.
    pub move_time_limit_secs: Option<u64>,
    /// Consecutive passes (both players counted) that end the game.
    pub max_consecutive_passes: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            rack_size: 7,
            powerups: true,
            move_time_limit_secs: Some(24 * 60 * 60),
            max_consecutive_passes: 4,
        }
    }
}

impl Rules {
    #[inline]
    pub const fn new(
        rack_size: u8,
        powerups: bool,
        move_time_limit_secs: Option<u64>,
        max_consecutive_passes: u8,
    ) -> Self {
        Self {
            rack_size,
            powerups,
            move_time_limit_secs,
            max_consecutive_passes,
        }
    }

    /// Plain word game: no mines or rewards on the board.
    #[inline]
    pub const fn classic() -> Self {
        Self {
            rack_size: 7,
            powerups: false,
            move_time_limit_secs: Some(24 * 60 * 60),
            max_consecutive_passes: 4,
        }
    }

    /// Time limit in milliseconds, the unit timestamps are kept in.
    #[inline]
    pub fn move_time_limit_ms(&self) -> Option<u64> {
        self.move_time_limit_secs.map(|s| s.saturating_mul(1000))
    }
}
