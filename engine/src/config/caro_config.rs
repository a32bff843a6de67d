use serde::{Deserialize, Serialize};

use super::Validate;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 20;
pub const MIN_WIN_LENGTH: usize = 3;
pub const MAX_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaroConfig {
    pub board_size: usize,
    pub win_length: usize,
    /// Zero disables the turn timer.
    pub turn_time_limit_ms: u64,
    pub search: SearchSection,
    pub gold_medal_moves: u32,
    pub silver_medal_moves: u32,
    pub hints_enabled: bool,
    pub game_over_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub depth: u8,
    pub thinking_delay_ms: u64,
}

impl Default for CaroConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            win_length: 5,
            turn_time_limit_ms: 30_000,
            search: SearchSection::default(),
            gold_medal_moves: 10,
            silver_medal_moves: 20,
            hints_enabled: false,
            game_over_delay_ms: 1_500,
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            depth: 2,
            thinking_delay_ms: 600,
        }
    }
}

impl Validate for CaroConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.win_length < MIN_WIN_LENGTH {
            return Err(format!("Win length must be at least {}", MIN_WIN_LENGTH));
        }
        if self.win_length > self.board_size {
            return Err(format!(
                "Win length ({}) cannot exceed board size ({})",
                self.win_length, self.board_size
            ));
        }
        self.search.validate()?;
        if self.gold_medal_moves == 0 {
            return Err("Gold medal threshold must be at least 1 move".to_string());
        }
        if self.silver_medal_moves < self.gold_medal_moves {
            return Err(format!(
                "Silver medal threshold ({}) cannot be below gold threshold ({})",
                self.silver_medal_moves, self.gold_medal_moves
            ));
        }
        Ok(())
    }
}

impl Validate for SearchSection {
    fn validate(&self) -> Result<(), String> {
        if self.depth == 0 || self.depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "Search depth must be between 1 and {}",
                MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}
