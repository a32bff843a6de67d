use super::board::Board;
use super::types::{Mark, Position};

pub fn is_valid_move(board: &Board, pos: Position) -> bool {
    board.value_at(pos) == Some(Mark::Empty)
}
