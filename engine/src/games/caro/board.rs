use super::types::{Mark, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize, win_length: usize) -> Self {
        assert!(
            (1..=size).contains(&win_length),
            "win length {} does not fit a {}x{} board",
            win_length,
            size,
            size
        );

        Self {
            size,
            win_length,
            cells: vec![Mark::Empty; size * size],
        }
    }

    #[cfg(test)]
    pub fn from_rows(win_length: usize, rows: &[&str]) -> Self {
        let mut board = Board::new(rows.len(), win_length);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                match ch {
                    'X' => board.place(pos, Side::Player),
                    'O' => board.place(pos, Side::Opponent),
                    _ => {}
                }
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn to_index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// `None` marks an out-of-range position, distinct from `Some(Mark::Empty)`.
    pub fn value_at(&self, pos: Position) -> Option<Mark> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(self.to_index(pos)).copied()
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.value_at(pos) == Some(Mark::Empty)
    }

    /// Out-of-range positions are ignored.
    pub fn place(&mut self, pos: Position, side: Side) {
        if !self.contains(pos) {
            return;
        }
        let index = self.to_index(pos);
        self.cells[index] = side.mark();
    }

    pub fn place_mark(&mut self, pos: Position, side: Side) -> Result<(), String> {
        match self.value_at(pos) {
            None => Err(format!("Position {} is out of bounds", pos)),
            Some(Mark::Empty) => {
                self.place(pos, side);
                Ok(())
            }
            Some(_) => Err(format!("Cell {} is already occupied", pos)),
        }
    }

    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn has_pieces(&self) -> bool {
        self.cells.iter().any(|&cell| cell != Mark::Empty)
    }

    pub fn center(&self) -> Position {
        let mid = (self.size - 1) / 2;
        Position::new(mid, mid)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Restores a cell during hypothetical search. Never called on the authoritative board.
    pub(super) fn clear(&mut self, pos: Position) {
        if self.contains(pos) {
            let index = self.to_index(pos);
            self.cells[index] = Mark::Empty;
        }
    }
}
