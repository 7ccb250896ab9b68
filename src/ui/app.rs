use crate::error::MoveError;
use crate::game::{Board, GameOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        let selected_column = game_state.board().cols() / 2;
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            _ => {}
        }
    }

    /// Start a new game on a board with the same dimensions
    fn reset(&mut self) {
        let board = self.game_state.board();
        let fresh = Board::with_dimensions(board.rows(), board.cols(), board.connect());
        self.game_state = GameState::with_board(fresh);
        self.selected_column = self.game_state.board().cols() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop the current player's piece in the selected column
    fn drop_piece(&mut self) {
        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", player.name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::InvalidColor) => {
                self.message = Some("Only Red or Yellow can move!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::initial())
    }
}
