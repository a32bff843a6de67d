use std::collections::BTreeSet;
use std::time::Duration;

use crate::games::{GameBroadcaster, GameEvent, GameSummary};
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::medal::Medal;
use super::settings::CaroSessionSettings;
use super::threat::get_dangerous_cells;
use super::types::{GameStatus, Move, Position, SessionState, Side, WinOutcome};
use super::validate::is_valid_move;
use super::win_detector::check_winner;

pub struct CaroSession<B: GameBroadcaster> {
    settings: CaroSessionSettings,
    broadcaster: B,
    state: SessionState,
    board: Option<Board>,
    moves: Vec<Move>,
    player_move_count: u32,
    opponent_move_count: u32,
    turn_time_remaining: Option<Duration>,
    thinking_elapsed: Duration,
    hints_enabled: bool,
    dangerous_cells: BTreeSet<Position>,
    summary: Option<GameSummary>,
}

impl<B: GameBroadcaster> CaroSession<B> {
    pub fn new(settings: CaroSessionSettings, broadcaster: B) -> Self {
        let hints_enabled = settings.hints_enabled;
        Self {
            settings,
            broadcaster,
            state: SessionState::Idle,
            board: None,
            moves: Vec::new(),
            player_move_count: 0,
            opponent_move_count: 0,
            turn_time_remaining: None,
            thinking_elapsed: Duration::ZERO,
            hints_enabled,
            dangerous_cells: BTreeSet::new(),
            summary: None,
        }
    }

    pub fn settings(&self) -> &CaroSessionSettings {
        &self.settings
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn player_move_count(&self) -> u32 {
        self.player_move_count
    }

    pub fn opponent_move_count(&self) -> u32 {
        self.opponent_move_count
    }

    pub fn turn_time_remaining(&self) -> Option<Duration> {
        self.turn_time_remaining
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    pub fn dangerous_cells(&self) -> &BTreeSet<Position> {
        &self.dangerous_cells
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Idle {
            log!("Ignoring start in state {:?}", self.state);
            return false;
        }

        self.board = Some(Board::new(self.settings.board_size, self.settings.win_length));
        self.moves.clear();
        self.player_move_count = 0;
        self.opponent_move_count = 0;
        self.summary = None;
        self.set_dangerous_cells(BTreeSet::new());

        log!(
            "Starting {}x{} round, {} in a row, depth {}",
            self.settings.board_size,
            self.settings.board_size,
            self.settings.win_length,
            self.settings.search.depth
        );
        self.enter_player_turn();
        true
    }

    pub fn submit_player_move(&mut self, pos: Position) -> bool {
        if self.state != SessionState::PlayerTurn {
            log!("Ignoring player move at {} in state {:?}", pos, self.state);
            return false;
        }

        let Some(board) = self.board.as_mut() else {
            return false;
        };

        if !is_valid_move(board, pos) {
            log!("Ignoring illegal player move at {}", pos);
            return false;
        }

        board.place(pos, Side::Player);
        self.player_move_count += 1;
        self.record_move(Move::new(pos, Side::Player));

        let outcome = self.detect_outcome();
        if outcome.status.is_finished() {
            self.enter_game_over(outcome, false);
        } else {
            self.turn_time_remaining = None;
            self.thinking_elapsed = Duration::ZERO;
            self.change_state(SessionState::OpponentThinking);
        }
        true
    }

    /// Applies the opponent's move now, regardless of the thinking delay.
    pub fn play_opponent_turn(&mut self) -> Option<Position> {
        if self.state != SessionState::OpponentThinking {
            log!("Ignoring opponent turn in state {:?}", self.state);
            return None;
        }

        let board = self.board.as_mut()?;
        let pos = calculate_move(BotInput::new(board, &self.settings.search))?;

        if let Err(e) = board.place_mark(pos, Side::Opponent) {
            log!("Opponent produced an unusable move: {}", e);
            return None;
        }
        self.opponent_move_count += 1;
        self.record_move(Move::new(pos, Side::Opponent));

        let outcome = self.detect_outcome();
        if outcome.status.is_finished() {
            self.enter_game_over(outcome, false);
        } else {
            self.enter_player_turn();
            if self.hints_enabled {
                self.refresh_hints();
            }
        }
        Some(pos)
    }

    pub fn advance_timer(&mut self, elapsed: Duration) {
        match self.state {
            SessionState::PlayerTurn => {
                let Some(remaining) = self.turn_time_remaining else {
                    return;
                };
                let remaining = remaining.saturating_sub(elapsed);
                self.turn_time_remaining = Some(remaining);
                if remaining.is_zero() {
                    log!("Player ran out of time after {} moves", self.player_move_count);
                    self.enter_game_over(WinOutcome::timed_out(), true);
                }
            }
            SessionState::OpponentThinking => {
                self.thinking_elapsed += elapsed;
                if self.thinking_elapsed >= self.settings.search.thinking_delay {
                    self.play_opponent_turn();
                }
            }
            SessionState::Idle | SessionState::GameOver => {}
        }
    }

    pub fn toggle_hints(&mut self) {
        self.hints_enabled = !self.hints_enabled;
        if !self.hints_enabled {
            self.set_dangerous_cells(BTreeSet::new());
        } else if self.state == SessionState::PlayerTurn {
            self.refresh_hints();
        }
    }

    /// Aborts from any state: the timer is dropped along with the board.
    pub fn reset_to_idle(&mut self) {
        self.board = None;
        self.moves.clear();
        self.player_move_count = 0;
        self.opponent_move_count = 0;
        self.turn_time_remaining = None;
        self.thinking_elapsed = Duration::ZERO;
        self.summary = None;
        self.set_dangerous_cells(BTreeSet::new());
        if self.state != SessionState::Idle {
            self.change_state(SessionState::Idle);
        }
    }

    fn enter_player_turn(&mut self) {
        self.turn_time_remaining = self.settings.turn_time_limit;
        self.change_state(SessionState::PlayerTurn);
    }

    fn enter_game_over(&mut self, outcome: WinOutcome, timed_out: bool) {
        self.turn_time_remaining = None;
        self.thinking_elapsed = Duration::ZERO;
        self.set_dangerous_cells(BTreeSet::new());

        self.broadcaster
            .broadcast_event(GameEvent::OutcomeDetected(outcome.clone()));
        self.change_state(SessionState::GameOver);

        let medal = Medal::award(
            outcome.status,
            timed_out,
            self.player_move_count,
            &self.settings.medals,
        );
        let summary = GameSummary {
            outcome,
            medal,
            player_moves: self.player_move_count,
            opponent_moves: self.opponent_move_count,
            timed_out,
        };
        log!(
            "Game over: {:?}, medal {:?}, moves {}/{}{}",
            summary.outcome.status,
            summary.medal,
            summary.player_moves,
            summary.opponent_moves,
            if timed_out { " (timeout)" } else { "" }
        );

        self.summary = Some(summary.clone());
        self.broadcaster.broadcast_game_over(summary);
    }

    fn detect_outcome(&self) -> WinOutcome {
        match &self.board {
            Some(board) => check_winner(board),
            None => WinOutcome {
                status: GameStatus::InProgress,
                line: None,
            },
        }
    }

    fn record_move(&mut self, mv: Move) {
        self.moves.push(mv);
        self.broadcaster.broadcast_event(GameEvent::CellPlaced {
            position: mv.position,
            mark: mv.side.mark(),
        });
    }

    fn refresh_hints(&mut self) {
        let cells = match &self.board {
            Some(board) => get_dangerous_cells(board, Side::Opponent),
            None => BTreeSet::new(),
        };
        self.set_dangerous_cells(cells);
    }

    fn set_dangerous_cells(&mut self, cells: BTreeSet<Position>) {
        if cells == self.dangerous_cells {
            return;
        }
        self.dangerous_cells = cells;
        self.broadcaster
            .broadcast_event(GameEvent::DangerousCellsChanged(self.dangerous_cells.clone()));
    }

    fn change_state(&mut self, state: SessionState) {
        self.state = state;
        self.broadcaster.broadcast_event(GameEvent::TurnChanged {
            state,
            turn: state.turn(),
        });
    }
}
