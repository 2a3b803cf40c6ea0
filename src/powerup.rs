use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::tile_kind_at;
use crate::error::PowerupError;
use crate::types::{Position, TileKind, CENTER};

/// Hidden board effects. The first five are mines, triggered on placement;
/// the last three are rewards, collected and spent later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerupKind {
    ScoreSplit,
    PointTransfer,
    LetterLoss,
    ExtraMoveBarrier,
    WordCancellation,
    RegionBan,
    LetterBan,
    ExtraMove,
}

impl PowerupKind {
    #[inline]
    pub fn is_reward(self) -> bool {
        matches!(self, PowerupKind::RegionBan | PowerupKind::LetterBan | PowerupKind::ExtraMove)
    }
}

/// How many of each kind a fresh board receives, in assignment order.
pub const POWERUP_QUANTITIES: [(PowerupKind, usize); 8] = [
    (PowerupKind::ScoreSplit, 5),
    (PowerupKind::PointTransfer, 4),
    (PowerupKind::LetterLoss, 3),
    (PowerupKind::ExtraMoveBarrier, 2),
    (PowerupKind::WordCancellation, 2),
    (PowerupKind::RegionBan, 2),
    (PowerupKind::LetterBan, 3),
    (PowerupKind::ExtraMove, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Powerup {
    pub kind: PowerupKind,
    pub position: Position,
    pub visible: bool,
    pub active: bool,
}

/// Half of the board a player may not place on for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionBan {
    /// Columns left of the center column are closed.
    LeftBanned,
    /// Columns right of the center column are closed.
    RightBanned,
}

impl RegionBan {
    /// The center column stays open under either ban.
    #[inline]
    pub fn allows(self, pos: Position) -> bool {
        match self {
            RegionBan::LeftBanned => pos.col() >= CENTER,
            RegionBan::RightBanned => pos.col() <= CENTER,
        }
    }
}

/// Cells that may host a powerup: normal tiles, never the center.
pub fn eligible_cells() -> Vec<Position> {
    Position::all()
        .filter(|p| tile_kind_at(*p) == TileKind::Normal)
        .collect()
}

/// Scatter the standard powerup set over the eligible cells.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<Powerup> {
    generate_from(eligible_cells(), rng)
}

/// Shuffle `cells` and hand them out in [`POWERUP_QUANTITIES`] order, one
/// powerup per cell, stopping early when cells run out.
pub fn generate_from<R: Rng + ?Sized>(mut cells: Vec<Position>, rng: &mut R) -> Vec<Powerup> {
    cells.sort_unstable();
    cells.dedup();
    cells.shuffle(rng);
    let mut pool = cells.into_iter();
    let mut out = Vec::new();
    'kinds: for &(kind, count) in &POWERUP_QUANTITIES {
        for _ in 0..count {
            let Some(position) = pool.next() else { break 'kinds };
            out.push(Powerup {
                kind,
                position,
                visible: false,
                active: true,
            });
        }
    }
    out
}

/// Result of stepping on one powerup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerupOutcome {
    /// Kind that fired, `None` when the powerup was already spent.
    pub triggered: Option<PowerupKind>,
    /// Points the acting player keeps after this effect.
    pub points: u32,
    /// Points the opponent receives instead.
    pub transfer: u32,
    /// Acting player's rack must be thrown away and refilled.
    pub discard_rack: bool,
    /// Tile multipliers are void for the whole move.
    pub ignore_multipliers: bool,
    /// Reward to add to the acting player's inventory.
    pub reward: Option<PowerupKind>,
}

/// Fire `powerup` against `base_points`. A spent powerup passes the points
/// through untouched; an active one is spent and revealed.
pub fn trigger(powerup: &mut Powerup, base_points: u32) -> PowerupOutcome {
    let mut out = PowerupOutcome {
        points: base_points,
        ..PowerupOutcome::default()
    };
    if !powerup.active {
        return out;
    }
    powerup.active = false;
    powerup.visible = true;
    out.triggered = Some(powerup.kind);
    match powerup.kind {
        PowerupKind::ScoreSplit => out.points = base_points * 3 / 10,
        PowerupKind::PointTransfer => {
            out.points = 0;
            out.transfer = base_points;
        }
        PowerupKind::LetterLoss => out.discard_rack = true,
        PowerupKind::ExtraMoveBarrier => out.ignore_multipliers = true,
        PowerupKind::WordCancellation => out.points = 0,
        PowerupKind::RegionBan | PowerupKind::LetterBan | PowerupKind::ExtraMove => {
            out.reward = Some(powerup.kind);
        }
    }
    tracing::debug!(kind = ?powerup.kind, position = %powerup.position, base_points, points = out.points, "powerup triggered");
    out
}

/// What spending a reward does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardEffect {
    /// Opponent's next turn is confined to one half.
    RegionBan(RegionBan),
    /// These two rack letters are frozen for the opponent's next turn.
    LetterBan([char; 2]),
    /// The user keeps the turn after their next move.
    ExtraMove,
}

/// Spend one `kind` from `inventory`. On error nothing is consumed.
pub fn use_reward<R: Rng + ?Sized>(
    inventory: &mut Vec<PowerupKind>,
    kind: PowerupKind,
    opponent_rack: &[char],
    rng: &mut R,
) -> Result<RewardEffect, PowerupError> {
    if !kind.is_reward() {
        return Err(PowerupError::NotAReward(kind));
    }
    let slot = inventory
        .iter()
        .position(|k| *k == kind)
        .ok_or(PowerupError::PowerupUnavailable(kind))?;

    let effect = match kind {
        PowerupKind::RegionBan => {
            let side = if rng.gen_bool(0.5) {
                RegionBan::LeftBanned
            } else {
                RegionBan::RightBanned
            };
            RewardEffect::RegionBan(side)
        }
        PowerupKind::LetterBan => {
            if opponent_rack.len() < 2 {
                return Err(PowerupError::InsufficientOpponentLetters);
            }
            let picks = index::sample(rng, opponent_rack.len(), 2);
            RewardEffect::LetterBan([opponent_rack[picks.index(0)], opponent_rack[picks.index(1)]])
        }
        _ => RewardEffect::ExtraMove,
    };
    inventory.remove(slot);
    Ok(effect)
}
