use super::settings::MedalThresholds;
use super::types::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// `None` only for a loss on time. A player win slower than the silver
    /// threshold still earns bronze, the same as a draw or a fair loss.
    pub fn award(
        status: GameStatus,
        timed_out: bool,
        player_moves: u32,
        thresholds: &MedalThresholds,
    ) -> Option<Medal> {
        match status {
            GameStatus::PlayerWon if player_moves <= thresholds.gold_moves => Some(Medal::Gold),
            GameStatus::PlayerWon if player_moves <= thresholds.silver_moves => Some(Medal::Silver),
            GameStatus::PlayerWon | GameStatus::Draw => Some(Medal::Bronze),
            GameStatus::OpponentWon if timed_out => None,
            GameStatus::OpponentWon => Some(Medal::Bronze),
            GameStatus::InProgress => None,
        }
    }
}
