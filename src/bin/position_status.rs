use std::env;
use std::fs;
use std::process;

use chess_rules::board::{Board, Color};
use chess_rules::game::Position;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: position_status <snapshot-file> [white|black]");
        process::exit(2);
    }

    let side = match args.get(2).map(String::as_str) {
        None | Some("white") => Color::White,
        Some("black") => Color::Black,
        Some(other) => {
            eprintln!("unknown side '{other}', expected white or black");
            process::exit(2);
        }
    };

    let text = match fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args[1]);
            process::exit(1);
        }
    };
    let board = match Board::from_grid(&text) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid snapshot: {err}");
            process::exit(1);
        }
    };

    let position = Position::new(board, side);
    let legal_moves = position.all_legal_moves();
    println!("side_to_move: {side}");
    println!("in_check: {}", position.board.is_in_check(side));
    println!("status: {position}");
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv} {}{}", mv.from.to_id(), mv.to.to_id());
    }
}
