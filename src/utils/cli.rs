use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board for a given FEN
    Show {
        /// FEN string for the position
        #[arg(short, long, default_value = START_FEN)]
        fen: String,
    },

    /// List legal moves per piece for a given FEN
    Moves {
        /// FEN string for the position
        #[arg(short, long, default_value = START_FEN)]
        fen: String,
    },

    /// Dump a JSON position snapshot for a given FEN
    Snapshot {
        /// FEN string for the position
        #[arg(short, long, default_value = START_FEN)]
        fen: String,
    },

    /// Play an interactive game from a given FEN
    Play {
        /// FEN string for the starting position
        #[arg(short, long, default_value = START_FEN)]
        fen: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "game_cmd", no_binary_name = true)]
pub struct GameCommand {
    #[command(subcommand)]
    pub cmd: GameSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GameSubcommand {
    /// Make a move on the board, e.g. `move e2 e4` or `move e7 e8 q`
    #[clap(visible_alias = "m")]
    Move {
        from: String,
        to: String,
        promotion: Option<char>,
    },

    /// Print the current board state
    #[clap(visible_alias = "p")]
    Print,

    /// Show the current fen of the board
    #[clap(visible_alias = "f")]
    Fen,

    /// List legal moves for the side to move
    #[clap(visible_alias = "l")]
    List,

    /// Set the console log level, e.g. `log debug`
    Log { level: String },

    /// Clear screen
    #[clap(visible_alias = "c")]
    Clear,

    /// Restart game with same fen
    #[clap(visible_alias = "r")]
    Restart,

    /// Quit game
    #[clap(visible_alias = "q")]
    Quit,
}

/// Interactive command loop over stdin. Runs until quit, end of input,
/// or a finished game.
pub fn game_loop(fen: &str) -> miette::Result<()> {
    let mut board = Board::from_fen(fen).into_diagnostic()?;
    println!("{board}");

    let stdin = std::io::stdin();
    let mut input = String::new();
    loop {
        if board.is_game_finished() {
            println!("Game over, winner: {}", board.winner_fen());
            return Ok(());
        }

        print!("> ");
        std::io::stdout().flush().into_diagnostic()?;
        input.clear();
        if stdin.lock().read_line(&mut input).into_diagnostic()? == 0 {
            return Ok(());
        }
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let cmd = match GameCommand::try_parse_from(&words) {
            Ok(parsed) => parsed.cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        debug!("running {cmd:?}");

        match cmd {
            GameSubcommand::Move {
                from,
                to,
                promotion,
            } => {
                match play_move(&mut board, &from, &to, promotion) {
                    Ok(()) => println!("{board}"),
                    Err(err) => warn!("{err}"),
                };
            }
            GameSubcommand::Print => println!("{board}"),
            GameSubcommand::Fen => println!("{}", board.to_fen()),
            GameSubcommand::List => print_legal_moves(&mut board),
            GameSubcommand::Log { level } => match level.parse::<Level>() {
                Ok(level) => super::log::set_log_level(level)?,
                Err(err) => println!("{err}"),
            },
            GameSubcommand::Clear => super::clear_screen()?,
            GameSubcommand::Restart => {
                board.load_fen(fen).into_diagnostic()?;
                println!("{board}");
            }
            GameSubcommand::Quit => return Ok(()),
        }
    }
}

/// Applies a move given in algebraic squares, rejecting anything the
/// legality filter does not offer for the side to move.
fn play_move(
    board: &mut Board,
    from: &str,
    to: &str,
    promotion: Option<char>,
) -> miette::Result<()> {
    let from: Square = from.parse()?;
    let to: Square = to.parse()?;

    let piece = board.piece_at(from);
    miette::ensure!(!piece.is_empty(), "no piece on {from}");
    miette::ensure!(
        piece.side() == Some(board.side_to_move()),
        "it is not that side's turn"
    );

    let legal = move_gen::legal_moves(board);
    miette::ensure!(
        legal[from.index()].contains(&to),
        "{from} to {to} is not a legal move"
    );

    let request = MoveRequest {
        from_square: from.index(),
        to_square: to.index(),
        promotion,
        is_en_passant: false,
        is_castle: false,
    };
    board
        .apply_move(&request.to_move().into_diagnostic()?)
        .into_diagnostic()
}

pub fn print_legal_moves(board: &mut Board) {
    let side = board.side_to_move();
    let legal = move_gen::legal_moves(board);
    for (index, destinations) in legal.iter().enumerate() {
        let Some(from) = Square::new(index) else {
            continue;
        };
        let piece = board.piece_at(from);
        if piece.is_empty() || piece.side() != Some(side) || destinations.is_empty() {
            continue;
        }
        let targets: Vec<String> = destinations
            .iter()
            .map(|square| square.to_string())
            .collect();
        println!("{} {}: {}", piece.to_fen(), from, targets.join(" "));
    }
}
