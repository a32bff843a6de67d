use super::board::Board;
use super::types::{Position, Side, WinOutcome, WinningLine};

/// Scan order: horizontal, vertical, diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn check_winner(board: &Board) -> WinOutcome {
    if let Some(line) = find_winning_line(board) {
        return WinOutcome::won(line);
    }

    if board.is_full() {
        WinOutcome::draw()
    } else {
        WinOutcome::in_progress()
    }
}

pub fn get_winning_line(board: &Board) -> Option<WinningLine> {
    find_winning_line(board)
}

// Row-major single pass keeping, per cell and direction, the length of the
// same-side streak ending at that cell. The first streak to hit the win
// length decides the reported line.
fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    let win_length = board.win_length();
    let mut streaks = vec![[0usize; 4]; size * size];

    for pos in board.positions() {
        let Some(side) = board.value_at(pos).and_then(|mark| mark.side()) else {
            continue;
        };

        for (dir, &(d_row, d_col)) in DIRECTIONS.iter().enumerate() {
            let previous = pos
                .offset(-d_row, -d_col)
                .filter(|&prev| board.value_at(prev) == Some(side.mark()))
                .map(|prev| streaks[prev.row * size + prev.col][dir])
                .unwrap_or(0);

            let streak = previous + 1;
            streaks[pos.row * size + pos.col][dir] = streak;

            if streak == win_length {
                return Some(collect_line(pos, d_row, d_col, win_length, side));
            }
        }
    }

    None
}

fn collect_line(end: Position, d_row: isize, d_col: isize, length: usize, side: Side) -> WinningLine {
    let cells = (0..length as isize)
        .rev()
        .filter_map(|back| end.offset(-d_row * back, -d_col * back))
        .collect();
    WinningLine::new(side, cells)
}

/// Whether the stone at `pos` is part of a completed line. Cheaper than a full
/// scan when only the last placement can have changed the result.
pub fn check_win_at(board: &Board, pos: Position) -> Option<Side> {
    let side = board.value_at(pos)?.side()?;
    let win_length = board.win_length();

    for (d_row, d_col) in DIRECTIONS {
        let count = 1
            + count_direction(board, pos, d_row, d_col, side)
            + count_direction(board, pos, -d_row, -d_col, side);
        if count >= win_length {
            return Some(side);
        }
    }

    None
}

pub(super) fn count_direction(board: &Board, from: Position, d_row: isize, d_col: isize, side: Side) -> usize {
    let mut count = 0;
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if board.value_at(next) != Some(side.mark()) {
            break;
        }
        count += 1;
        current = next;
    }
    count
}
