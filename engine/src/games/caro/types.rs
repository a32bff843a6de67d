use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Player,
    Opponent,
}

impl Mark {
    pub fn side(&self) -> Option<Side> {
        match self {
            Mark::Player => Some(Side::Player),
            Mark::Opponent => Some(Side::Opponent),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Opponent => Mark::Opponent,
        }
    }
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        side.mark()
    }
}

/// Ordered row-major, so sets of positions iterate in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub side: Side,
}

impl Move {
    pub fn new(position: Position, side: Side) -> Self {
        Self { position, side }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::PlayerWon => Some(Side::Player),
            GameStatus::OpponentWon => Some(Side::Opponent),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Player => GameStatus::PlayerWon,
            Side::Opponent => GameStatus::OpponentWon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub cells: Vec<Position>,
}

impl WinningLine {
    pub fn new(side: Side, cells: Vec<Position>) -> Self {
        Self { side, cells }
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinOutcome {
    pub status: GameStatus,
    pub line: Option<WinningLine>,
}

impl WinOutcome {
    pub fn in_progress() -> Self {
        Self {
            status: GameStatus::InProgress,
            line: None,
        }
    }

    pub fn draw() -> Self {
        Self {
            status: GameStatus::Draw,
            line: None,
        }
    }

    pub fn won(line: WinningLine) -> Self {
        Self {
            status: GameStatus::won_by(line.side),
            line: Some(line),
        }
    }

    pub fn timed_out() -> Self {
        Self {
            status: GameStatus::OpponentWon,
            line: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    PlayerTurn,
    OpponentThinking,
    GameOver,
}

impl SessionState {
    pub fn turn(&self) -> Option<Side> {
        match self {
            SessionState::PlayerTurn => Some(Side::Player),
            SessionState::OpponentThinking => Some(Side::Opponent),
            SessionState::Idle | SessionState::GameOver => None,
        }
    }
}
