mod board;
mod bot_controller;
mod heuristic;
mod medal;
mod session;
mod settings;
mod threat;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, NEIGHBOR_RADIUS, WIN_SCORE, calculate_move, candidate_moves};
pub use heuristic::{count_threats, evaluate_board};
pub use medal::Medal;
pub use session::CaroSession;
pub use settings::{CaroSessionSettings, MedalThresholds, SearchConfig};
pub use threat::get_dangerous_cells;
pub use types::{GameStatus, Mark, Move, Position, SessionState, Side, WinOutcome, WinningLine};
pub use validate::is_valid_move;
pub use win_detector::{check_win_at, check_winner, get_winning_line};
