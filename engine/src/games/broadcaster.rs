use std::collections::BTreeSet;

use super::caro::{Mark, Medal, Position, SessionState, Side, WinOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CellPlaced { position: Position, mark: Mark },
    TurnChanged { state: SessionState, turn: Option<Side> },
    OutcomeDetected(WinOutcome),
    DangerousCellsChanged(BTreeSet<Position>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: WinOutcome,
    pub medal: Option<Medal>,
    pub player_moves: u32,
    pub opponent_moves: u32,
    pub timed_out: bool,
}

pub trait GameBroadcaster {
    fn broadcast_event(&mut self, event: GameEvent);

    fn broadcast_game_over(&mut self, summary: GameSummary);
}

#[derive(Debug, Default)]
pub struct RecordingBroadcaster {
    pub events: Vec<GameEvent>,
    pub summaries: Vec<GameSummary>,
}

impl RecordingBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameBroadcaster for RecordingBroadcaster {
    fn broadcast_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn broadcast_game_over(&mut self, summary: GameSummary) {
        self.summaries.push(summary);
    }
}
