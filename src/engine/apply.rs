use rand::Rng;

use crate::dictionary::Dictionary;
use crate::engine::score::{score_move, ScoreResult};
use crate::engine::validate::validate_move;
use crate::error::{MoveError, PowerupError};
use crate::letters::{refill_rack, LetterBag};
use crate::powerup::{generate, use_reward, PowerupKind, RewardEffect};
use crate::rng::rng_for_turn;
use crate::rules::Rules;
use crate::state::{EndReason, GameData, GameStatus, LastMove, Move, Seat};
use crate::types::Player;

/// What a committed move did, for the caller to show or log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    /// Main word through the placements.
    pub word: String,
    /// All normalized words checked against the dictionary.
    pub words: Vec<String>,
    pub score: ScoreResult,
    /// Letters drawn from the bag afterwards.
    pub drawn: usize,
    /// Whether the mover keeps the turn.
    pub extra_move: bool,
    /// Set when this move ended the game.
    pub completed: Option<GameStatus>,
}

/// Start a game between `player_a` (who moves first) and `player_b`, with
/// randomness derived from `seed`.
pub fn new_game(
    game_id: &str,
    player_a: &str,
    player_b: &str,
    rules: Rules,
    seed: u64,
    now: u64,
) -> GameData {
    let mut rng = rng_for_turn(seed, game_id, 0);
    new_game_with_rng(game_id, player_a, player_b, rules, seed, now, &mut rng)
}

/// Like [`new_game`] with an explicit random source.
pub fn new_game_with_rng<R: Rng + ?Sized>(
    game_id: &str,
    player_a: &str,
    player_b: &str,
    rules: Rules,
    seed: u64,
    now: u64,
    rng: &mut R,
) -> GameData {
    let mut bag = LetterBag::full(rng);
    let mut seats = [Seat::new(player_a), Seat::new(player_b)];
    for seat in &mut seats {
        refill_rack(&mut seat.rack, usize::from(rules.rack_size), &mut bag, rng);
    }
    let powerups = if rules.powerups { generate(rng) } else { Vec::new() };
    tracing::info!(game_id, player_a, player_b, powerups = powerups.len(), "game created");
    GameData {
        game_id: game_id.to_string(),
        rules,
        seed,
        status: GameStatus::Pending,
        board: Default::default(),
        turn: Player::A,
        turn_number: 0,
        seats,
        bag,
        powerups,
        last_move: None,
        consecutive_passes: 0,
        created_at: now,
        updated_at: now,
        version: 0,
    }
}

/// The invited player (seat B) accepts a pending game.
pub fn accept_game(game: &GameData, player: Player, now: u64) -> Result<GameData, MoveError> {
    if game.status != GameStatus::Pending {
        return Err(MoveError::GameNotActive);
    }
    if player != Player::B {
        return Err(MoveError::NotYourTurn);
    }
    let mut ns = game.clone();
    ns.status = GameStatus::Active;
    ns.touch(now);
    tracing::info!(game_id = %ns.game_id, "game accepted");
    Ok(ns)
}

/// Validate, score and commit `mv` for `player`. Returns the next state;
/// on error `game` is untouched and nothing is committed.
pub fn apply_move<D, R>(
    game: &GameData,
    player: Player,
    mv: &Move,
    dict: &D,
    rng: &mut R,
    now: u64,
) -> Result<(GameData, MoveOutcome), MoveError>
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    let validated = validate_move(game, player, mv, dict)?;

    let mut ns = game.clone();
    for (pos, tile) in mv.iter() {
        ns.board.set(pos, tile);
    }

    let score = score_move(mv, &mut ns.powerups);
    let rack_size = usize::from(ns.rules.rack_size);
    let GameData { seats, bag, .. } = &mut ns;
    let (acting, opponent) = split_seats(seats, player);

    for (_, tile) in mv.iter() {
        if let Some(i) = acting.rack.iter().position(|c| *c == tile.rack_symbol()) {
            acting.rack.swap_remove(i);
        }
    }
    acting.score += score.points;
    opponent.score += score.transfer;
    acting.inventory.extend(score.rewards.iter().copied());
    if score.discard_rack {
        acting.rack.clear();
    }
    let drawn = refill_rack(&mut acting.rack, rack_size, bag, rng);
    acting.clear_bans();

    let extra_move = acting.extra_move;
    acting.extra_move = false;
    let rack_empty = acting.rack.is_empty();

    ns.last_move = Some(LastMove {
        player,
        player_id: ns.seat(player).id.clone(),
        word: mv.summary_word(),
        points: score.points,
        timestamp: now,
    });
    if !extra_move {
        ns.turn = player.other();
    }
    ns.turn_number += 1;
    ns.consecutive_passes = 0;

    let mut completed = None;
    if rack_empty && ns.bag.is_empty() {
        let status = GameStatus::Completed {
            winner: ns.leader(),
            reason: EndReason::TilesExhausted,
        };
        ns.status = status;
        completed = Some(status);
        tracing::info!(game_id = %ns.game_id, ?status, "game completed");
    }
    ns.touch(now);

    tracing::info!(
        game_id = %ns.game_id,
        ?player,
        word = %validated.primary_word,
        points = score.points,
        transfer = score.transfer,
        "move committed"
    );
    Ok((
        ns,
        MoveOutcome {
            player,
            word: validated.primary_word,
            words: validated.words,
            score,
            drawn,
            extra_move,
            completed,
        },
    ))
}

/// Spend a collected reward during `player`'s turn. The turn does not pass.
pub fn use_powerup<R: Rng + ?Sized>(
    game: &GameData,
    player: Player,
    kind: PowerupKind,
    rng: &mut R,
    now: u64,
) -> Result<(GameData, RewardEffect), PowerupError> {
    if !game.is_active() {
        return Err(PowerupError::GameNotActive);
    }
    if game.turn != player {
        return Err(PowerupError::NotYourTurn);
    }
    let mut ns = game.clone();
    let (acting, opponent) = split_seats(&mut ns.seats, player);
    let effect = use_reward(&mut acting.inventory, kind, &opponent.rack, rng)?;
    match effect {
        RewardEffect::RegionBan(side) => opponent.region_ban = Some(side),
        RewardEffect::LetterBan(letters) => opponent.banned_letters.extend(letters),
        RewardEffect::ExtraMove => acting.extra_move = true,
    }
    ns.touch(now);
    tracing::info!(game_id = %ns.game_id, ?player, ?kind, ?effect, "powerup used");
    Ok((ns, effect))
}

/// Give up the turn without placing. Bans and a pending extra move expire.
pub fn pass_turn(game: &GameData, player: Player, now: u64) -> Result<GameData, MoveError> {
    if !game.is_active() {
        return Err(MoveError::GameNotActive);
    }
    if game.turn != player {
        return Err(MoveError::NotYourTurn);
    }
    let mut ns = game.clone();
    let seat = ns.seat_mut(player);
    seat.clear_bans();
    seat.extra_move = false;
    ns.turn = player.other();
    ns.turn_number += 1;
    ns.consecutive_passes = ns.consecutive_passes.saturating_add(1);
    if ns.consecutive_passes >= ns.rules.max_consecutive_passes {
        ns.status = GameStatus::Completed {
            winner: ns.leader(),
            reason: EndReason::Passes,
        };
        tracing::info!(game_id = %ns.game_id, status = ?ns.status, "game completed");
    }
    ns.touch(now);
    tracing::info!(game_id = %ns.game_id, ?player, passes = ns.consecutive_passes, "turn passed");
    Ok(ns)
}

/// End the game if the player on turn has run out of time; they lose.
/// Returns `None` while the clock has not expired.
pub fn resolve_timeout(game: &GameData, now: u64) -> Option<GameData> {
    let limit = game.rules.move_time_limit_ms()?;
    if !game.is_active() || now.saturating_sub(game.updated_at) <= limit {
        return None;
    }
    let mut ns = game.clone();
    ns.status = GameStatus::Completed {
        winner: Some(game.turn.other()),
        reason: EndReason::Timeout,
    };
    ns.touch(now);
    tracing::info!(game_id = %ns.game_id, loser = ?game.turn, "game timed out");
    Some(ns)
}

#[inline]
fn split_seats(seats: &mut [Seat; 2], player: Player) -> (&mut Seat, &mut Seat) {
    let [a, b] = seats;
    match player {
        Player::A => (a, b),
        Player::B => (b, a),
    }
}
