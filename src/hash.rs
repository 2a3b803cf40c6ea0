use crate::state::{GameData, GameStatus};
use crate::types::Player;

/// SplitMix64 step for stable, fast token generation.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn token128_from_seed(seed: u64) -> u128 {
    // Two rounds to build 128 bits deterministically.
    let lo = splitmix64(seed ^ 0xC0FF_EE00_D15E_CAFE);
    let hi = splitmix64(seed ^ 0xDEAD_BEEF_F00D_FACE ^ lo.rotate_left(17));
    (u128::from(hi) << 64) | u128::from(lo)
}

// Domain tags (arbitrary but fixed)
const DOM_BOARD: u64 = 0xB0A2_1D5E_0000_0001;
const DOM_RACK: u64 = 0xB0A2_1D5E_0000_00A0;
const DOM_TURN: u64 = 0xB0A2_1D5E_0000_00C0;
const DOM_SCORE: u64 = 0xB0A2_1D5E_0000_00D0;
const DOM_BAG: u64 = 0xB0A2_1D5E_0000_00E0;
const DOM_POWERUP: u64 = 0xB0A2_1D5E_0000_00F0;
const DOM_META: u64 = 0xB0A2_1D5E_0000_0100;

/// Stable 64-bit key for a game id string.
pub fn game_key(game_id: &str) -> u64 {
    game_id
        .bytes()
        .fold(0x5EED_0F_6A3E_u64, |acc, b| splitmix64(acc ^ u64::from(b)))
}

#[inline]
fn player_bit(p: Player) -> u64 {
    match p {
        Player::A => 0,
        Player::B => 1,
    }
}

/// 128-bit fingerprint of a game's full contents. Equal games hash equal;
/// any change to board, racks, scores, bag, powerups, bans, status or
/// bookkeeping changes it with overwhelming probability.
pub fn state_fingerprint(game: &GameData) -> u128 {
    let mut z: u128 = token128_from_seed(DOM_META ^ game_key(&game.game_id));

    for (pos, tile) in game.board.iter() {
        let seed = DOM_BOARD
            ^ u64::from(pos.summary_key())
            ^ (u64::from(tile.letter) << 16)
            ^ (u64::from(tile.joker) << 48);
        z ^= token128_from_seed(seed);
    }

    for player in [Player::A, Player::B] {
        let seat = game.seat(player);
        let pb = player_bit(player) << 40;
        // Racks are unordered multisets: sum rather than xor so duplicates count.
        for ch in &seat.rack {
            z = z.wrapping_add(token128_from_seed(DOM_RACK ^ pb ^ u64::from(*ch)));
        }
        z ^= token128_from_seed(DOM_SCORE ^ pb ^ u64::from(seat.score));
        for (i, kind) in seat.inventory.iter().enumerate() {
            z ^= token128_from_seed(DOM_POWERUP ^ pb ^ ((i as u64) << 8) ^ (*kind as u64) ^ 0x77);
        }
        for ch in &seat.banned_letters {
            z ^= token128_from_seed(DOM_RACK ^ pb ^ (1 << 47) ^ u64::from(*ch));
        }
        let flags = seat.region_ban.map_or(0, |b| b as u64 + 1) | (u64::from(seat.extra_move) << 4);
        z ^= token128_from_seed(DOM_META ^ pb ^ (flags << 8) ^ game_key(&seat.id));
    }

    for (i, ch) in game.bag.letters().iter().enumerate() {
        z ^= token128_from_seed(DOM_BAG ^ ((i as u64) << 24) ^ u64::from(*ch));
    }

    for p in &game.powerups {
        let seed = DOM_POWERUP
            ^ (u64::from(p.position.summary_key()) << 16)
            ^ ((p.kind as u64) << 32)
            ^ (u64::from(p.visible) << 40)
            ^ (u64::from(p.active) << 41);
        z ^= token128_from_seed(seed);
    }

    let status: u64 = match game.status {
        GameStatus::Pending => 1,
        GameStatus::Active => 2,
        GameStatus::Completed { winner, reason } => {
            3 | (winner.map_or(0, |w| player_bit(w) + 1) << 4) | ((reason as u64) << 8)
        }
    };
    z ^= token128_from_seed(DOM_TURN ^ player_bit(game.turn) ^ (u64::from(game.turn_number) << 8) ^ (status << 40));
    z ^= token128_from_seed(DOM_META ^ game.version ^ game.updated_at.rotate_left(32));
    z ^= token128_from_seed(DOM_META ^ game.seed.rotate_left(7) ^ (u64::from(game.consecutive_passes) << 56));
    if let Some(last) = &game.last_move {
        let seed = DOM_SCORE ^ 0x1A57 ^ u64::from(last.points) ^ last.timestamp.rotate_left(20) ^ game_key(&last.word);
        z ^= token128_from_seed(seed);
    }
    z
}
