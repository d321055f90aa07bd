#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use gomoku::{
    default_scoreboard_path, init_logging, load_or_default, parse_coord, print_board,
    print_board_highlight, print_scoreboard, save_scoreboard, Command, GameEngine, GameSession,
    MoveOutcome, Player, Reply, TimerEvent, TurnTimer, TURN_SECONDS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::mpsc;

#[cfg(feature = "std")]
type StdinLines = tokio::io::Lines<BufReader<tokio::io::Stdin>>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive two-player game at this terminal.
    Play {
        #[arg(long, help = "Scoreboard file (default: gomoku_scores.bin, or GOMOKU_SCORES)")]
        scores: Option<PathBuf>,
    },
    /// Run a random self-play game and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { scores } => play(scores).await,
        Commands::Sim { seed } => sim(seed),
    }
}

#[cfg(feature = "std")]
async fn prompt_name(lines: &mut StdinLines, number: u8) -> anyhow::Result<String> {
    print!("Name for player {} [Player {}]: ", number, number);
    std::io::stdout().flush()?;
    let line = lines.next_line().await?.unwrap_or_default();
    let name = line.trim();
    Ok(if name.is_empty() {
        format!("Player {}", number)
    } else {
        name.to_string()
    })
}

#[cfg(feature = "std")]
fn glyph(player: Player) -> char {
    match player {
        Player::One => 'X',
        Player::Two => 'O',
    }
}

#[cfg(feature = "std")]
fn prompt_turn(names: &[String; 2], player: Player) {
    println!(
        "{} ({}) to move, {} seconds. Coordinate like E5, or undo/new/quit.",
        names[player.index()],
        glyph(player),
        TURN_SECONDS
    );
}

#[cfg(feature = "std")]
async fn ask_rematch(lines: &mut StdinLines) -> anyhow::Result<bool> {
    print!("Play again? [Y/n]: ");
    std::io::stdout().flush()?;
    match lines.next_line().await? {
        Some(line) => Ok(!line.trim().eq_ignore_ascii_case("n")),
        None => Ok(false),
    }
}

#[cfg(feature = "std")]
async fn play(scores: Option<PathBuf>) -> anyhow::Result<()> {
    let scores_path = scores.unwrap_or_else(default_scoreboard_path);
    let scoreboard = load_or_default(&scores_path);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Five in a row on a 10x10 board.");
    let player1 = prompt_name(&mut lines, 1).await?;
    let player2 = prompt_name(&mut lines, 2).await?;
    let names = [player1, player2];
    print_scoreboard(&names[0], &names[1], &scoreboard);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let timer = TurnTimer::new(tx, TURN_SECONDS);
    let mut session = GameSession::new(GameEngine::with_scoreboard(scoreboard), timer);
    session.start();

    print_board(session.engine().board());
    prompt_turn(&names, session.engine().current_player());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                match input.to_ascii_lowercase().as_str() {
                    "quit" | "q" => break,
                    "undo" | "u" => match session.dispatch(Command::Undo) {
                        Reply::Undone(mv) => {
                            println!(
                                "Took back {} by {}.",
                                gomoku::coord_to_string(mv.row, mv.col),
                                names[mv.player.index()]
                            );
                            print_board(session.engine().board());
                            prompt_turn(&names, session.engine().current_player());
                        }
                        _ => println!("Nothing to undo."),
                    },
                    "new" | "n" => {
                        session.dispatch(Command::NewGame);
                        while rx.try_recv().is_ok() {}
                        println!("New game.");
                        print_board(session.engine().board());
                        prompt_turn(&names, session.engine().current_player());
                    }
                    _ => {
                        let Some((row, col)) = parse_coord(input) else {
                            println!("Unrecognized input. Coordinate like E5, or undo/new/quit.");
                            continue;
                        };
                        match session.dispatch(Command::Place { row, col }) {
                            Reply::Placed(MoveOutcome::Continue) => {
                                print_board(session.engine().board());
                                prompt_turn(&names, session.engine().current_player());
                            }
                            Reply::Placed(MoveOutcome::Win { winner, cells }) => {
                                print_board_highlight(session.engine().board(), &cells);
                                println!("{} wins!", names[winner.index()]);
                                if !game_over(&mut session, &mut lines, &mut rx, &names, &scores_path).await? {
                                    break;
                                }
                            }
                            Reply::Placed(MoveOutcome::Draw) => {
                                print_board(session.engine().board());
                                println!("Draw!");
                                if !game_over(&mut session, &mut lines, &mut rx, &names, &scores_path).await? {
                                    break;
                                }
                            }
                            _ => println!("Move ignored (cell taken or game over)."),
                        }
                    }
                }
            }
            ev = rx.recv() => {
                match ev {
                    Some(TimerEvent::Tick { remaining }) if remaining == 10 || remaining == 5 => {
                        println!("{} seconds left!", remaining);
                    }
                    Some(TimerEvent::Tick { .. }) => {}
                    Some(TimerEvent::Expired) => {
                        if session.expire_turn() {
                            println!("Time is up! Turn passes.");
                            prompt_turn(&names, session.engine().current_player());
                        }
                    }
                    None => break,
                }
            }
        }
    }

    if let Err(err) = save_scoreboard(&scores_path, &session.engine().scoreboard()) {
        log::warn!("scoreboard save failed: {:#}", err);
    }
    println!("Final tallies:");
    print_scoreboard(&names[0], &names[1], &session.engine().scoreboard());
    Ok(())
}

/// End-of-game bookkeeping: persist the scoreboard, offer a rematch and
/// restart the session when accepted. Returns `false` to leave the loop.
#[cfg(feature = "std")]
async fn game_over(
    session: &mut GameSession,
    lines: &mut StdinLines,
    rx: &mut mpsc::UnboundedReceiver<TimerEvent>,
    names: &[String; 2],
    scores_path: &Path,
) -> anyhow::Result<bool> {
    let scoreboard = session.engine().scoreboard();
    print_scoreboard(&names[0], &names[1], &scoreboard);
    if let Err(err) = save_scoreboard(scores_path, &scoreboard) {
        log::warn!("scoreboard save failed: {:#}", err);
    }
    if !ask_rematch(lines).await? {
        return Ok(false);
    }
    session.dispatch(Command::NewGame);
    // drop ticks queued before the restart
    while rx.try_recv().is_ok() {}
    print_board(session.engine().board());
    prompt_turn(names, session.engine().current_player());
    Ok(true)
}

#[cfg(feature = "std")]
fn sim(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut engine = GameEngine::new();
    let outcome = loop {
        let empties = !engine.board().occupied();
        let open: Vec<(usize, usize)> = empties.iter_set_bits().collect();
        let (row, col) = open[rng.random_range(0..open.len())];
        let Some(outcome) = engine.place_move(row, col) else {
            anyhow::bail!("self-play picked an invalid cell at ({}, {})", row, col);
        };
        match outcome {
            MoveOutcome::Continue => continue,
            done => break done,
        }
    };

    let (winner, cells) = match &outcome {
        MoveOutcome::Win { winner, cells } => {
            (Some(format!("player{}", winner.number())), cells.clone())
        }
        _ => (None, Vec::new()),
    };

    let result = serde_json::json!({
        "moves": engine.move_count(),
        "winner": winner,
        "winning_cells": cells,
        "scoreboard": engine.scoreboard(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
