use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kelime::persist::{load_game, save_game};
use kelime::{
    accept_game, apply_move, find_all_words, load_word_list, new_game, pass_turn, resolve_timeout,
    rng_for_turn, state_fingerprint, use_powerup, GameData, GameStatus, Move, Player, Position,
    PowerupKind, Rules, Tile,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RewardOpt {
    RegionBan,
    LetterBan,
    ExtraMove,
}

impl From<RewardOpt> for PowerupKind {
    fn from(r: RewardOpt) -> Self {
        match r {
            RewardOpt::RegionBan => PowerupKind::RegionBan,
            RewardOpt::LetterBan => PowerupKind::LetterBan,
            RewardOpt::ExtraMove => PowerupKind::ExtraMove,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kelime", about = "Kelime game engine driver over a JSON game file")]
struct Args {
    /// Game document path
    #[arg(long, default_value = "game.json")]
    game: PathBuf,

    /// Timestamp in milliseconds since the epoch (defaults to the system clock)
    #[arg(long)]
    now: Option<u64>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Create a new pending game
    New {
        #[arg(long, default_value = "game-1")]
        id: String,
        /// Player id for seat A (moves first)
        #[arg(long)]
        a: String,
        /// Player id for seat B (must accept)
        #[arg(long)]
        b: String,
        #[arg(long, default_value_t = 0x00C0FFEEu64)]
        seed: u64,
        /// Disable mines and rewards
        #[arg(long)]
        classic: bool,
    },
    /// Seat B accepts the game
    Accept,
    /// Print board, scores and racks
    Show,
    /// Place letters for the player on turn: --place 7,7=K --place 7,8=*A
    Play {
        /// Word list, one word per line
        #[arg(long, default_value = "words.txt")]
        dict: PathBuf,
        #[arg(long = "place", required = true)]
        placements: Vec<String>,
    },
    /// Pass the turn
    Pass,
    /// Spend a collected reward
    UsePowerup {
        #[arg(long, value_enum)]
        kind: RewardOpt,
    },
    /// End the game if the player on turn ran out of time
    Timeout,
    /// List every word on the board
    Words,
}

fn parse_placement(s: &str) -> Result<(Position, Tile), String> {
    let (pos, tile) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid placement '{s}', expected row,col=LETTER"))?;
    let pos: Position = pos.parse().map_err(|e| format!("Invalid placement '{s}': {e}"))?;
    let tile: Tile = tile.trim().parse().map_err(|e| format!("Invalid placement '{s}': {e}"))?;
    Ok((pos, tile))
}

fn system_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn print_game(game: &GameData) {
    print!("{}", game.board.render());
    for p in [Player::A, Player::B] {
        let seat = game.seat(p);
        let rack: String = seat.rack.iter().collect();
        let marker = if game.turn == p { "*" } else { " " };
        println!(
            "{marker} {:?} {:<12} score={:<4} rack={:<7} rewards={:?}",
            p, seat.id, seat.score, rack, seat.inventory
        );
    }
    println!("status={:?} bag={} version={}", game.status, game.bag.len(), game.version);
    if let Some(last) = &game.last_move {
        println!("last move: {} played {} for {}", last.player_id, last.word, last.points);
    }
    println!("fingerprint {:032x}", state_fingerprint(game));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let now = args.now.unwrap_or_else(system_now);

    match args.cmd {
        Cmd::New { id, a, b, seed, classic } => {
            let rules = if classic { Rules::classic() } else { Rules::default() };
            let game = new_game(&id, &a, &b, rules, seed, now);
            save_game(&args.game, &game)?;
            println!("[kelime] Created {} ({} vs {}), {} powerups", id, a, b, game.powerups.len());
        }
        Cmd::Accept => {
            let game = load_game(&args.game)?;
            let ns = accept_game(&game, Player::B, now)?;
            save_game(&args.game, &ns)?;
            println!("[kelime] {} accepted", ns.seat(Player::B).id);
        }
        Cmd::Show => {
            let game = load_game(&args.game)?;
            print_game(&game);
        }
        Cmd::Play { dict, placements } => {
            let game = load_game(&args.game)?;
            let words = load_word_list(&dict).map_err(|e| format!("Word list load error: {e}"))?;
            let mut mv = Move::new();
            for p in &placements {
                let (pos, tile) = parse_placement(p)?;
                if mv.place(pos, tile).is_some() {
                    return Err(format!("Invalid placement '{p}': duplicate cell {pos}").into());
                }
            }
            let mut rng = rng_for_turn(game.seed, &game.game_id, game.version);
            let (ns, outcome) = apply_move(&game, game.turn, &mv, &words, &mut rng, now)?;
            save_game(&args.game, &ns)?;
            println!(
                "[kelime] {:?} played {} for {} points (words: {})",
                outcome.player,
                outcome.word,
                outcome.score.points,
                outcome.words.join(", ")
            );
            for (pos, kind) in &outcome.score.triggered {
                println!("[kelime] Triggered {kind:?} at {pos}");
            }
            if let Some(GameStatus::Completed { winner, reason }) = outcome.completed {
                println!("[kelime] Game over ({reason:?}), winner: {winner:?}");
            }
        }
        Cmd::Pass => {
            let game = load_game(&args.game)?;
            let ns = pass_turn(&game, game.turn, now)?;
            save_game(&args.game, &ns)?;
            println!("[kelime] {:?} passed", game.turn);
        }
        Cmd::UsePowerup { kind } => {
            let game = load_game(&args.game)?;
            let mut rng = rng_for_turn(game.seed, &game.game_id, game.version);
            let (ns, effect) = use_powerup(&game, game.turn, kind.into(), &mut rng, now)?;
            save_game(&args.game, &ns)?;
            println!("[kelime] {:?} used {:?}: {:?}", game.turn, PowerupKind::from(kind), effect);
        }
        Cmd::Timeout => {
            let game = load_game(&args.game)?;
            match resolve_timeout(&game, now) {
                Some(ns) => {
                    save_game(&args.game, &ns)?;
                    println!("[kelime] {:?} timed out", game.turn);
                }
                None => println!("[kelime] Clock still running"),
            }
        }
        Cmd::Words => {
            let game = load_game(&args.game)?;
            for w in find_all_words(&game.board) {
                println!("{w}");
            }
        }
    }

    Ok(())
}
