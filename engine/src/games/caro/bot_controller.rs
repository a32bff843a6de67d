use crate::log;
use super::board::Board;
use super::heuristic::evaluate_board;
use super::settings::SearchConfig;
use super::types::{Position, Side};
use super::win_detector::check_win_at;

/// Larger than any heuristic total on a legal board, so a forced result
/// always dominates.
pub const WIN_SCORE: i64 = 1 << 60;
pub const NEIGHBOR_RADIUS: isize = 2;

pub struct BotInput {
    pub board: Board,
    pub depth: u8,
}

impl BotInput {
    pub fn new(board: &Board, config: &SearchConfig) -> Self {
        Self {
            board: board.snapshot(),
            depth: config.depth,
        }
    }
}

/// Best move for the opponent, or `None` when the board has no empty cell.
pub fn calculate_move(input: BotInput) -> Option<Position> {
    let BotInput { mut board, depth } = input;
    let (best_move, best_score) = search_root(&mut board, depth.max(1))?;
    log!("Opponent picked {} with score {} at depth {}", best_move, best_score, depth);
    Some(best_move)
}

pub fn candidate_moves(board: &Board) -> Vec<Position> {
    if !board.has_pieces() {
        return vec![board.center()];
    }

    board
        .positions()
        .filter(|&pos| board.is_empty(pos) && has_neighbor(board, pos))
        .collect()
}

fn has_neighbor(board: &Board, pos: Position) -> bool {
    for d_row in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
        for d_col in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let occupied = pos
                .offset(d_row, d_col)
                .and_then(|p| board.value_at(p))
                .is_some_and(|mark| mark.side().is_some());
            if occupied {
                return true;
            }
        }
    }
    false
}

// Root ties keep the first candidate in row-major order: only a strictly
// better score replaces the current best.
fn search_root(board: &mut Board, depth: u8) -> Option<(Position, i64)> {
    let mut best: Option<(Position, i64)> = None;
    let mut alpha = i64::MIN;

    for pos in candidate_moves(board) {
        board.place(pos, Side::Opponent);
        let score = minimax(board, depth - 1, false, alpha, i64::MAX, pos, 1);
        board.clear(pos);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
            alpha = alpha.max(score);
        }
    }

    best
}

fn minimax(
    board: &mut Board,
    depth: u8,
    is_maximizing: bool,
    mut alpha: i64,
    mut beta: i64,
    last_move: Position,
    ply: i64,
) -> i64 {
    if let Some(winner) = check_win_at(board, last_move) {
        return match winner {
            Side::Opponent => WIN_SCORE - ply,
            Side::Player => -WIN_SCORE + ply,
        };
    }

    if board.is_full() {
        return 0;
    }

    if depth == 0 {
        return evaluate_board(board);
    }

    let moves = candidate_moves(board);
    if moves.is_empty() {
        return evaluate_board(board);
    }

    if is_maximizing {
        let mut max_eval = i64::MIN;
        for pos in moves {
            board.place(pos, Side::Opponent);
            let eval = minimax(board, depth - 1, false, alpha, beta, pos, ply + 1);
            board.clear(pos);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i64::MAX;
        for pos in moves {
            board.place(pos, Side::Player);
            let eval = minimax(board, depth - 1, true, alpha, beta, pos, ply + 1);
            board.clear(pos);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::caro::types::Mark;
    use crate::games::caro::win_detector::check_winner;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::time::Duration;

    fn search(board: &Board, depth: u8) -> Option<Position> {
        let config = SearchConfig {
            depth,
            thinking_delay: Duration::ZERO,
        };
        calculate_move(BotInput::new(board, &config))
    }

    fn plain_minimax(board: &mut Board, depth: u8, is_maximizing: bool, last_move: Position, ply: i64) -> i64 {
        if let Some(winner) = check_win_at(board, last_move) {
            return match winner {
                Side::Opponent => WIN_SCORE - ply,
                Side::Player => -WIN_SCORE + ply,
            };
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return evaluate_board(board);
        }
        let moves = candidate_moves(board);
        if moves.is_empty() {
            return evaluate_board(board);
        }
        let side = if is_maximizing { Side::Opponent } else { Side::Player };
        let scores = moves.into_iter().map(|pos| {
            board.place(pos, side);
            let score = plain_minimax(board, depth - 1, !is_maximizing, pos, ply + 1);
            board.clear(pos);
            score
        });
        let scores: Vec<i64> = scores.collect();
        if is_maximizing {
            scores.into_iter().max().unwrap_or(0)
        } else {
            scores.into_iter().min().unwrap_or(0)
        }
    }

    fn plain_best_move(board: &Board, depth: u8) -> Option<Position> {
        let mut board = board.snapshot();
        let mut best: Option<(Position, i64)> = None;
        for pos in candidate_moves(&board) {
            board.place(pos, Side::Opponent);
            let score = plain_minimax(&mut board, depth - 1, false, pos, 1);
            board.clear(pos);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn random_board(rng: &mut StdRng, size: usize, win_length: usize, stones: usize) -> Board {
        loop {
            let mut board = Board::new(size, win_length);
            let mut side = Side::Player;
            let mut placed = 0;
            while placed < stones {
                let pos = Position::new(rng.random_range(0..size), rng.random_range(0..size));
                if board.is_empty(pos) {
                    board.place(pos, side);
                    side = side.opponent();
                    placed += 1;
                }
            }
            if !check_winner(&board).status.is_finished() {
                return board;
            }
        }
    }

    #[test]
    fn test_empty_board_opens_in_center() {
        let board = Board::new(10, 5);
        for depth in 1..=3 {
            assert_eq!(search(&board, depth), Some(Position::new(4, 4)));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows(3, &["XOX", "XOO", "OXX"]);
        assert_eq!(search(&board, 2), None);
    }

    #[test]
    fn test_candidates_stay_near_stones() {
        let mut board = Board::new(10, 5);
        board.place(Position::new(0, 0), Side::Player);
        let candidates = candidate_moves(&board);
        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0], Position::new(0, 1));
        assert!(candidates.iter().all(|p| p.row <= 2 && p.col <= 2));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_rows(5, &[
            "..........",
            "..........",
            "...OOOO...",
            "...XXX....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        for depth in 1..=2 {
            assert_eq!(search(&board, depth), Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn test_blocks_players_four() {
        let board = Board::from_rows(5, &[
            "..........",
            "..........",
            "..OXXXX...",
            "....O.....",
            "...O......",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(search(&board, 2), Some(Position::new(2, 7)));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        let board = Board::from_rows(5, &[
            "..........",
            ".XXXX.....",
            "..........",
            "..........",
            "......OOOO",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(search(&board, 2), Some(Position::new(4, 5)));
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::from_rows(5, &[
            "..........",
            "..........",
            "..........",
            "....X.....",
            "....OX....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        assert_eq!(search(&board, 3), search(&board, 3));
    }

    #[test]
    fn test_returned_move_is_always_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..40 {
            let size = rng.random_range(5..=8);
            let stones = rng.random_range(1..size * 2);
            let board = random_board(&mut rng, size, 4, stones);
            for depth in 1..=2 {
                let pos = search(&board, depth).unwrap();
                assert_eq!(board.value_at(pos), Some(Mark::Empty));
            }
        }
    }

    #[test]
    fn test_pruning_does_not_change_choice() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..25 {
            let stones = rng.random_range(2..10);
            let board = random_board(&mut rng, 6, 4, stones);
            for depth in 1..=2 {
                assert_eq!(search(&board, depth), plain_best_move(&board, depth));
            }
        }
    }
}
