use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn-taking wrapper around [`Board`]: tracks whose move it is and derives
/// the game outcome after each move. The board itself has no notion of a
/// current player.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a game state on the given board. Red moves first on a fresh
    /// board; a board that is already decided or full starts terminal.
    pub fn with_board(board: Board) -> Self {
        let outcome = if let Some(winner) = board.winner() {
            Player::from_cell(winner).map(GameOutcome::Winner)
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        GameState {
            board,
            current_player: Player::Red,
            outcome,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())?;

        if self.board.is_over() {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}
