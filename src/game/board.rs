use std::fmt;

use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character symbol used for textual rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The Connect Four grid with gravity drops and win detection.
///
/// Cells are addressed by `(row, col)` with row 0 at the bottom, stored in a
/// single flat vector. Per-column height counters track the next free row, so
/// filled cells in a column always occupy contiguous rows starting at row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    connect: usize,
    cells: Vec<Cell>,
    col_heights: Vec<usize>,
    game_over: bool,
    winner: Option<Cell>,
}

impl Board {
    /// Create a standard empty board: 6 rows, 7 columns, 4 to win.
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_CONNECT)
    }

    /// Create an empty board with the given dimensions and win length.
    pub fn with_dimensions(rows: usize, cols: usize, connect: usize) -> Self {
        Board {
            rows,
            cols,
            connect,
            cells: vec![Cell::Empty; rows * cols],
            col_heights: vec![0; cols],
            game_over: false,
            winner: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether `(row, col)` addresses a cell on this board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a specific position, or `None` if out of bounds.
    /// Row 0 is the bottom of the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Number of pieces currently stacked in a column, or `None` if the
    /// column index is out of range.
    pub fn column_height(&self, col: usize) -> Option<usize> {
        self.col_heights.get(col).copied()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.col_heights.get(col) {
            Some(&height) => height == self.rows,
            None => true,
        }
    }

    /// Check if the board is completely full. A full board with no winner is
    /// a draw; callers derive that from this plus [`Board::winner`].
    pub fn is_full(&self) -> bool {
        self.col_heights.iter().all(|&height| height == self.rows)
    }

    /// Whether a winning line has been completed. Never resets.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The winning color, or `None` while the game is undecided.
    /// Never `Cell::Empty`.
    pub fn winner(&self) -> Option<Cell> {
        self.winner
    }

    /// Drop a piece in a column, returning the row where it landed.
    ///
    /// On success the piece lands in the lowest free row of the column and
    /// win detection runs, seeded at the landing cell. On any error the
    /// board is left untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        if cell == Cell::Empty {
            return Err(MoveError::InvalidColor);
        }
        if self.col_heights[col] == self.rows {
            return Err(MoveError::ColumnFull { column: col });
        }

        let row = self.col_heights[col];
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        self.col_heights[col] += 1;

        if self.check_win(row, col, cell) {
            self.game_over = true;
            self.winner = Some(cell);
        }

        Ok(row)
    }

    /// Check if the piece just placed at (row, col) completed a line.
    ///
    /// Only the four lines through the placed cell can newly reach the win
    /// length, so each direction is scanned once and the first hit decides
    /// the game.
    fn check_win(&self, row: usize, col: usize, cell: Cell) -> bool {
        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1; // Count the current piece

        // Check left
        let mut c = col as i64 - 1;
        while c >= 0 && self.cells[self.index(row, c as usize)] == cell {
            count += 1;
            c -= 1;
        }

        // Check right
        let mut c = col + 1;
        while c < self.cols && self.cells[self.index(row, c)] == cell {
            count += 1;
            c += 1;
        }

        count >= self.connect
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Only need to check downward (every cell above a fresh piece is empty)
        let mut r = row as i64 - 1;
        while r >= 0 && self.cells[self.index(r as usize, col)] == cell {
            count += 1;
            r -= 1;
        }

        count >= self.connect
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check down-left
        let mut r = row as i64 - 1;
        let mut c = col as i64 - 1;
        while r >= 0 && c >= 0 && self.cells[self.index(r as usize, c as usize)] == cell {
            count += 1;
            r -= 1;
            c -= 1;
        }

        // Check up-right
        let mut r = row + 1;
        let mut c = col + 1;
        while r < self.rows && c < self.cols && self.cells[self.index(r, c)] == cell {
            count += 1;
            r += 1;
            c += 1;
        }

        count >= self.connect
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check up-left
        let mut r = row + 1;
        let mut c = col as i64 - 1;
        while r < self.rows && c >= 0 && self.cells[self.index(r, c as usize)] == cell {
            count += 1;
            r += 1;
            c -= 1;
        }

        // Check down-right
        let mut r = row as i64 - 1;
        let mut c = col + 1;
        while r >= 0 && c < self.cols && self.cells[self.index(r as usize, c)] == cell {
            count += 1;
            r -= 1;
            c += 1;
        }

        count >= self.connect
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Debugging render: top row first, each cell as `[<symbol>]`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                write!(f, "[{}]", self.cells[self.index(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
