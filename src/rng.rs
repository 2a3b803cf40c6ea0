use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::hash::game_key;

/// Deterministic RNG for a given (seed, game_id, turn) triple.
///
/// Implementation detail:
/// - Derives a per-turn 64-bit seed as `seed ^ game_key(game_id) ^ turn`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Hosts that persist `GameData::seed` can replay bag draws and powerup
///   placement exactly.
#[inline]
pub fn rng_for_turn(seed: u64, game_id: &str, turn: u64) -> Pcg64 {
    let derived: u64 = seed ^ game_key(game_id) ^ turn;
    Pcg64::seed_from_u64(derived)
}
