use crate::board::tile_kind_at;
use crate::powerup::{trigger, Powerup, PowerupKind};
use crate::state::Move;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Letter values times tile multipliers, before any mine.
    pub base: u32,
    /// What the acting player is credited with.
    pub points: u32,
    /// What the opponent is credited with instead.
    pub transfer: u32,
    pub ignore_multipliers: bool,
    pub discard_rack: bool,
    /// Rewards picked up, in placement order.
    pub rewards: Vec<PowerupKind>,
    /// Powerups that fired, in placement order.
    pub triggered: Vec<(Position, PowerupKind)>,
}

/// Score of the placed letters alone. Letter multipliers apply per tile,
/// word multipliers of every placed tile multiply together.
pub fn base_score(mv: &Move, ignore_multipliers: bool) -> u32 {
    let mut sum = 0u32;
    let mut word_mult = 1u32;
    for (pos, tile) in mv.iter() {
        let kind = tile_kind_at(pos);
        if ignore_multipliers {
            sum += tile.value();
        } else {
            sum += tile.value() * kind.letter_multiplier();
            word_mult *= kind.word_multiplier();
        }
    }
    sum * word_mult
}

/// Score `mv` and fire the powerups under it.
///
/// Any barrier under the move voids all multipliers first. The remaining
/// effects then run in placement order, each on the running total: a split
/// after a transfer splits nothing, a transfer after a split hands over the
/// reduced amount.
pub fn score_move(mv: &Move, powerups: &mut [Powerup]) -> ScoreResult {
    let barrier = mv.iter().any(|(pos, _)| {
        active_at(powerups, pos).is_some_and(|i| powerups[i].kind == PowerupKind::ExtraMoveBarrier)
    });
    let base = base_score(mv, barrier);

    let mut result = ScoreResult {
        base,
        points: base,
        ignore_multipliers: barrier,
        ..ScoreResult::default()
    };
    for (pos, _) in mv.iter() {
        let Some(i) = active_at(powerups, pos) else {
            continue;
        };
        let out = trigger(&mut powerups[i], result.points);
        result.points = out.points;
        result.transfer += out.transfer;
        result.discard_rack |= out.discard_rack;
        if let Some(kind) = out.reward {
            result.rewards.push(kind);
        }
        if let Some(kind) = out.triggered {
            result.triggered.push((pos, kind));
        }
    }
    result
}

/// Index of the unspent powerup on `pos`.
#[inline]
fn active_at(powerups: &[Powerup], pos: Position) -> Option<usize> {
    powerups.iter().position(|p| p.position == pos && p.active)
}
