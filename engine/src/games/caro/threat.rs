use std::collections::BTreeSet;

use super::board::Board;
use super::types::{Position, Side};
use super::win_detector::check_winner;

/// Empty cells where `side` would complete a line with its next stone.
/// Works on its own copy of the board; the caller's board is never touched.
pub fn get_dangerous_cells(board: &Board, side: Side) -> BTreeSet<Position> {
    let mut scratch = board.snapshot();
    let mut dangerous = BTreeSet::new();

    for pos in board.empty_cells() {
        scratch.place(pos, side);
        if check_winner(&scratch).status.winner() == Some(side) {
            dangerous.insert(pos);
        }
        scratch.clear(pos);
    }

    dangerous
}
