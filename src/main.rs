//! Console front-end for the rules engine.
//!
//! A stand-in for a graphical presentation layer: each input line naming a
//! square (e.g. `e2`) is one "click". The board is re-rendered after every
//! click with the selected square bracketed.

use std::io::{self, BufRead, Write};

use chess_core::view::GameView;
use chess_core::{ClickOutcome, GameSession, Square};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_core=info".into()),
        )
        .init();

    let mut session = GameSession::new();
    tracing::info!(id = %session.id, "new game started");

    println!("chess-cli v{}", env!("CARGO_PKG_VERSION"));
    println!("Click squares by typing them (e.g. e2). Commands: fen <placement> [w|b], json, quit.");
    print_board(&session);

    let stdin = io::stdin();
    loop {
        print!("{} to move> ", session.turn());
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("input error: {e}");
                break;
            }
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "json" => {
                let view = GameView::from_session(&session);
                match serde_json::to_string_pretty(&view) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("serialization error: {e}"),
                }
            }
            _ if input.starts_with("fen ") => {
                match GameSession::from_fen(input.trim_start_matches("fen ").trim()) {
                    Ok(s) => {
                        session = s;
                        println!("position loaded");
                        print_board(&session);
                    }
                    Err(e) => println!("error: {e}"),
                }
            }
            _ => match Square::from_algebraic(input) {
                Some(sq) => {
                    let outcome = session.handle_click(sq);
                    report(&session, outcome);
                    print_board(&session);
                }
                None => println!("not a square or command: '{input}'"),
            },
        }

        if session.is_game_over() {
            println!("Game over: {}.", session.status());
            break;
        }
    }
}

fn report(session: &GameSession, outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Selected(sq) => println!("selected {sq}"),
        ClickOutcome::Moved { mv, status } => {
            println!("played {mv}");
            if !matches!(status, chess_core::GameStatus::Normal) {
                println!("{status}");
            }
        }
        ClickOutcome::Deselected => println!("deselected"),
        ClickOutcome::Ignored => {
            if session.is_game_over() {
                println!("the game is over");
            }
        }
    }
}

/// Render the board with rank/file labels, bracketing the selected square.
fn print_board(session: &GameSession) {
    let snap = session.snapshot();
    for row in 0..8u8 {
        print!("{} ", 8 - row);
        for col in 0..8u8 {
            let sq = Square::new(row, col);
            let ch = match snap.board.get(sq) {
                Some(piece) => piece.to_char(),
                None => '.',
            };
            if snap.selected == Some(sq) {
                print!("[{ch}]");
            } else {
                print!(" {ch} ");
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
}
