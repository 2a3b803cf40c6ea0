use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

use kelime::persist::{load_game, save_game};
use kelime::{GameStatus, Player};

fn kelime(game: &Path, now: u64) -> Command {
    let mut cmd = Command::cargo_bin("kelime").expect("binary exists");
    cmd.arg("--game").arg(game).arg("--now").arg(now.to_string());
    cmd
}

#[test]
fn full_turn_through_the_cli() {
    let dir = tempdir().expect("tempdir");
    let game = dir.path().join("game.json");
    let words = dir.path().join("words.txt");
    fs::write(&words, "# test list\nkalem\nev\n").expect("write words");

    kelime(&game, 1_000)
        .args(["new", "--id", "g-cli", "--a", "ali", "--b", "ayse", "--classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[kelime] Created g-cli (ali vs ayse), 0 powerups"));

    kelime(&game, 2_000)
        .arg("accept")
        .assert()
        .success()
        .stdout(predicate::str::contains("ayse accepted"));

    kelime(&game, 2_500)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("status=Active"));

    // Pin the rack so the move below is known to be legal.
    let mut doc = load_game(&game).expect("load");
    doc.seat_mut(Player::A).rack = "KALEMAA".chars().collect();
    save_game(&game, &doc).expect("save");

    kelime(&game, 3_000)
        .args(["play", "--dict"])
        .arg(&words)
        .args(["--place", "7,5=K", "--place", "7,6=A", "--place", "7,7=L"])
        .args(["--place", "7,8=E", "--place", "7,9=M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A played KALEM for 6 points"));

    kelime(&game, 3_500)
        .arg("words")
        .assert()
        .success()
        .stdout(predicate::str::contains("KALEM"));

    kelime(&game, 4_000)
        .arg("pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("B passed"));

    let doc = load_game(&game).expect("load");
    assert_eq!(doc.status, GameStatus::Active);
    assert_eq!(doc.score(Player::A), 6);
    assert_eq!(doc.turn, Player::A);
    assert_eq!(doc.consecutive_passes, 1);
}

#[test]
fn rejected_move_leaves_document_untouched() {
    let dir = tempdir().expect("tempdir");
    let game = dir.path().join("game.json");
    let words = dir.path().join("words.txt");
    fs::write(&words, "kalem\n").expect("write words");

    kelime(&game, 1_000)
        .args(["new", "--a", "ali", "--b", "ayse", "--classic"])
        .assert()
        .success();
    kelime(&game, 2_000).arg("accept").assert().success();
    let before = fs::read_to_string(&game).expect("read");

    // Off-center opening.
    kelime(&game, 3_000)
        .args(["play", "--dict"])
        .arg(&words)
        .args(["--place", "0,0=A", "--place", "0,1=B"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&game).expect("read"), before);

    // Two letters on one cell.
    kelime(&game, 3_000)
        .args(["play", "--dict"])
        .arg(&words)
        .args(["--place", "7,7=K", "--place", "7,7=A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate cell 7,7"));
    assert_eq!(fs::read_to_string(&game).expect("read"), before);

    kelime(&game, 3_000)
        .args(["play", "--dict"])
        .arg(&words)
        .args(["--place", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid placement"));
}

#[test]
fn pending_game_cannot_be_played() {
    let dir = tempdir().expect("tempdir");
    let game = dir.path().join("game.json");
    kelime(&game, 1_000)
        .args(["new", "--a", "ali", "--b", "ayse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23 powerups"));
    kelime(&game, 2_000).arg("pass").assert().failure();
    kelime(&game, 2_000)
        .arg("timeout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clock still running"));
}
