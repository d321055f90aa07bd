use gomoku::{load_or_default, load_scoreboard, save_scoreboard, Player, Scoreboard};
use std::path::PathBuf;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gomoku_{}_{}.bin", tag, std::process::id()))
}

#[test]
fn test_record_win_and_draw() {
    let mut scoreboard = Scoreboard::default();
    scoreboard.record_win(Player::One);
    scoreboard.record_win(Player::Two);
    scoreboard.record_win(Player::One);
    scoreboard.record_draw();

    assert_eq!(scoreboard.player1_wins, 2);
    assert_eq!(scoreboard.player2_wins, 1);
    assert_eq!(scoreboard.total_games, 4);
    assert_eq!(scoreboard.wins(Player::One), 2);
    assert_eq!(scoreboard.wins(Player::Two), 1);
}

#[test]
fn test_save_load_roundtrip() {
    let path = temp_path("roundtrip");
    let scoreboard = Scoreboard {
        player1_wins: 7,
        player2_wins: 3,
        total_games: 12,
    };
    save_scoreboard(&path, &scoreboard).unwrap();
    let loaded = load_scoreboard(&path).unwrap();
    assert_eq!(loaded, scoreboard);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_degrades_to_zero() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);
    assert_eq!(load_or_default(&path), Scoreboard::default());
}

#[test]
fn test_corrupt_file_degrades_to_zero() {
    let path = temp_path("corrupt");
    // too short to decode three counters
    std::fs::write(&path, b"xx").unwrap();
    assert_eq!(load_or_default(&path), Scoreboard::default());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_or_default_reads_saved_tallies() {
    let path = temp_path("saved");
    let scoreboard = Scoreboard {
        player1_wins: 1,
        player2_wins: 2,
        total_games: 4,
    };
    save_scoreboard(&path, &scoreboard).unwrap();
    assert_eq!(load_or_default(&path), scoreboard);
    let _ = std::fs::remove_file(&path);
}
