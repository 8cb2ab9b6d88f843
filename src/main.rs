use clap::Parser;
use damier::prelude::*;
use damier::utils::cli;
use tracing::{Level, span, trace};

fn main() -> miette::Result<()> {
    init();

    let span = span!(Level::DEBUG, "main");
    let _guard = span.enter();
    match cli::Cli::parse().command {
        Some(cmd) => match cmd {
            cli::Commands::Show { fen } => {
                trace!("Showing board for fen: {:?}", fen);
                let board = Board::from_fen(&fen).into_diagnostic()?;
                println!("{board}");
            }
            cli::Commands::Moves { fen } => {
                trace!("Listing moves for fen: {:?}", fen);
                let mut board = Board::from_fen(&fen).into_diagnostic()?;
                cli::print_legal_moves(&mut board);
            }
            cli::Commands::Snapshot { fen } => {
                trace!("Snapshotting fen: {:?}", fen);
                let mut board = Board::from_fen(&fen).into_diagnostic()?;
                let position = position::snapshot(&mut board);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&position).into_diagnostic()?
                );
            }
            cli::Commands::Play { fen } => {
                trace!("Starting game with fen: {:?}", fen);
                cli::game_loop(&fen)?;
            }
        },
        None => {
            cli::game_loop(START_FEN)?;
        }
    }
    Ok(())
}
