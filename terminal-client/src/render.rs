use std::collections::BTreeSet;

use caro_engine::games::caro::{Board, Mark, Position};

pub fn render_board(board: &Board, dangerous: &BTreeSet<Position>, last_move: Option<Position>) -> String {
    let mut out = String::from("   ");
    for col in 0..board.size() {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..board.size() {
        out.push_str(&format!("{:>3}", row));
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let symbol = match board.value_at(pos) {
                Some(Mark::Player) => 'X',
                Some(Mark::Opponent) => 'O',
                _ if dangerous.contains(&pos) => '!',
                _ => '.',
            };
            if last_move == Some(pos) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }

    out
}
