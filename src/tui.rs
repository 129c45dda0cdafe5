//! The textual user interface: two players share one terminal.

use crate::config::Config;
use crate::render;
use engine::{Engine, Move, ParseSquareError, Square};
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Enter a move as two squares, e.g. `b3 e3` or `b3e3`.
  moves <square>   list where the piece on <square> can go
  help             show this text
  quit             leave the game";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Move),
    Moves(Square),
    Help,
    Quit,
    Empty,
    Invalid(ParseSquareError),
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input {
        "" => return Command::Empty,
        "help" | "?" => return Command::Help,
        "quit" | "exit" => return Command::Quit,
        _ => {}
    }
    if let Some(rest) = input.strip_prefix("moves") {
        return match rest.trim().parse() {
            Ok(sq) => Command::Moves(sq),
            Err(err) => Command::Invalid(err),
        };
    }
    match input.parse() {
        Ok(mv) => Command::Play(mv),
        Err(err) => Command::Invalid(err),
    }
}

fn list_targets(game: &Engine, from: Square) -> String {
    let targets = game.legal_moves_from(from);
    if targets.is_empty() {
        return format!("No legal moves from {from}.");
    }
    let list: Vec<String> = targets.iter().map(Square::to_string).collect();
    format!("{from} can move to: {}", list.join(" "))
}

/// Runs the main game loop until the game ends, the players quit, or input closes.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut game = Engine::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "--- Xiangqi ---")?;
    writeln!(out, "{HELP}")?;

    loop {
        writeln!(out)?;
        write!(out, "{}", render::board(&game.board_snapshot(), config))?;

        let state = game.game_state();
        if let Some(winner) = state.winner() {
            let loser = winner.opponent();
            let how = if game.is_in_check(loser) { "Checkmate" } else { "No moves left" };
            writeln!(out, "{how}! {winner} wins ({state}) after {} moves.", game.move_count())?;
            break;
        }

        let turn = game.current_turn();
        if game.is_in_check(turn) {
            writeln!(out, "{turn} is in check!")?;
        }
        write!(out, "{turn} to move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = parse_command(&line);
        debug!(?command, "input");
        match command {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Moves(sq) => writeln!(out, "{}", list_targets(&game, sq))?,
            Command::Invalid(err) => writeln!(out, "Could not read that: {err}")?,
            Command::Play(mv) => {
                if let Err(reason) = game.try_move(mv.from, mv.to) {
                    writeln!(out, "Illegal move {mv}: {reason}")?;
                    if config.hints && game.piece_at(mv.from).is_some_and(|p| p.color == turn) {
                        writeln!(out, "{}", list_targets(&game, mv.from))?;
                    }
                }
            }
        }
    }
    Ok(())
}
