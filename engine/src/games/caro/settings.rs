use std::time::Duration;

use crate::config::CaroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Presentation only; never affects which move is chosen.
    pub thinking_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedalThresholds {
    pub gold_moves: u32,
    pub silver_moves: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaroSessionSettings {
    pub board_size: usize,
    pub win_length: usize,
    pub turn_time_limit: Option<Duration>,
    pub search: SearchConfig,
    pub medals: MedalThresholds,
    pub hints_enabled: bool,
    pub game_over_delay: Duration,
}

impl From<&CaroConfig> for CaroSessionSettings {
    fn from(config: &CaroConfig) -> Self {
        let turn_time_limit = match config.turn_time_limit_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        Self {
            board_size: config.board_size,
            win_length: config.win_length,
            turn_time_limit,
            search: SearchConfig {
                depth: config.search.depth,
                thinking_delay: Duration::from_millis(config.search.thinking_delay_ms),
            },
            medals: MedalThresholds {
                gold_moves: config.gold_medal_moves,
                silver_moves: config.silver_medal_moves,
            },
            hints_enabled: config.hints_enabled,
            game_over_delay: Duration::from_millis(config.game_over_delay_ms),
        }
    }
}

impl Default for CaroSessionSettings {
    fn default() -> Self {
        Self::from(&CaroConfig::default())
    }
}
