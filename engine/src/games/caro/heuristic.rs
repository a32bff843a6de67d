use super::board::Board;
use super::types::{Position, Side};
use super::win_detector::DIRECTIONS;

/// Static score from the opponent's point of view: positive favours the
/// opponent, negative favours the player.
pub fn evaluate_board(board: &Board) -> i64 {
    count_threats(board, Side::Opponent) - count_threats(board, Side::Player)
}

pub fn count_threats(board: &Board, side: Side) -> i64 {
    let mut score = 0;
    for pos in board.positions() {
        for (d_row, d_col) in DIRECTIONS {
            score += window_score(board, pos, d_row, d_col, side);
        }
    }
    score
}

fn window_score(board: &Board, start: Position, d_row: isize, d_col: isize, side: Side) -> i64 {
    let win_length = board.win_length();
    let last = (win_length - 1) as isize;

    let Some(end) = start.offset(d_row * last, d_col * last) else {
        return 0;
    };
    if !board.contains(end) {
        return 0;
    }

    let mut count = 0usize;
    for i in 0..win_length as isize {
        let Some(cell) = start.offset(d_row * i, d_col * i).and_then(|p| board.value_at(p)) else {
            return 0;
        };
        match cell.side() {
            Some(owner) if owner == side => count += 1,
            Some(_) => return 0,
            None => {}
        }
    }

    if count == 0 {
        return 0;
    }

    let is_open = |pos: Option<Position>| pos.is_some_and(|p| board.is_empty(p));
    let open_ends = usize::from(is_open(start.offset(-d_row, -d_col))) + usize::from(is_open(end.offset(d_row, d_col)));

    let mut score = 1i64 << (count.min(win_length) * 2);

    if count + 1 == win_length {
        score *= if open_ends == 2 { 16 } else { 4 };
    } else if count + 2 == win_length && open_ends == 2 {
        score *= 8;
    } else if open_ends == 2 {
        score *= 2;
    }

    score
}
