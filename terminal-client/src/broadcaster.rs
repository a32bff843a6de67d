use caro_engine::games::caro::{GameStatus, Mark, Medal, SessionState};
use caro_engine::games::{GameBroadcaster, GameEvent, GameSummary};

/// Prints engine events as they happen. The summary is held back so the
/// host can show it after the game-over delay.
#[derive(Default)]
pub struct TerminalBroadcaster {
    pending_summary: Option<GameSummary>,
}

impl TerminalBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_summary(&mut self) -> Option<GameSummary> {
        self.pending_summary.take()
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    fn broadcast_event(&mut self, event: GameEvent) {
        if let Some(text) = describe_event(&event) {
            println!("{}", text);
        }
    }

    fn broadcast_game_over(&mut self, summary: GameSummary) {
        self.pending_summary = Some(summary);
    }
}

fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::CellPlaced { position, mark } => match mark {
            Mark::Player => Some(format!("You played {}", position)),
            Mark::Opponent => Some(format!("Opponent played {}", position)),
            Mark::Empty => None,
        },
        GameEvent::TurnChanged { state, .. } => match state {
            SessionState::OpponentThinking => Some("Opponent is thinking...".to_string()),
            _ => None,
        },
        GameEvent::OutcomeDetected(outcome) => outcome.line.as_ref().map(|line| {
            format!(
                "Winning line from {} to {}",
                line.start().map(|p| p.to_string()).unwrap_or_default(),
                line.end().map(|p| p.to_string()).unwrap_or_default()
            )
        }),
        GameEvent::DangerousCellsChanged(cells) => {
            if cells.is_empty() {
                None
            } else {
                let list: Vec<String> = cells.iter().map(|p| p.to_string()).collect();
                Some(format!("Danger: opponent wins at {}", list.join(", ")))
            }
        }
    }
}

pub fn describe_summary(summary: &GameSummary) -> String {
    let headline = match summary.outcome.status {
        GameStatus::PlayerWon => "You win!",
        GameStatus::OpponentWon if summary.timed_out => "Time is up, you lose.",
        GameStatus::OpponentWon => "Opponent wins.",
        GameStatus::Draw => "Draw, the board is full.",
        GameStatus::InProgress => "Game abandoned.",
    };

    let medal = match summary.medal {
        Some(Medal::Gold) => "gold medal",
        Some(Medal::Silver) => "silver medal",
        Some(Medal::Bronze) => "bronze medal",
        None => "no medal",
    };

    format!(
        "{} {} moves by you, {} by the opponent, {}.",
        headline, summary.player_moves, summary.opponent_moves, medal
    )
}
