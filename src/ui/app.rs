use crate::config::UiConfig;
use crate::game::{Board, GameEvent, TurnController};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::board_widget::ViewGrid;
use super::game_view::{self, Turn};

/// End-of-game text waiting for its display time.
struct Announcement {
    text: String,
    due: Instant,
}

pub struct App {
    controller: TurnController,
    grid: ViewGrid,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    announcement: Option<Announcement>,
    announce_delay: Duration,
    tick: Duration,
}

impl App {
    pub fn new(board: Board, ui: &UiConfig) -> Self {
        let grid = ViewGrid::new(board.width(), board.height());
        App {
            selected_column: board.width() / 2, // Start in middle
            controller: TurnController::new(board),
            grid,
            should_quit: false,
            message: None,
            announcement: None,
            announce_delay: Duration::from_millis(ui.announce_delay_ms),
            tick: Duration::from_millis(ui.tick_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.update(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.grid.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.choose_column(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Out-of-range digits reach the controller and are dropped there
                let column = c as usize - '1' as usize;
                if column < self.grid.width() {
                    self.selected_column = column;
                }
                self.controller.choose_column(column);
            }
            KeyCode::Char('r' | 'R') => {
                self.controller.reset();
                self.selected_column = self.grid.width() / 2;
            }
            _ => {}
        }

        self.apply_events(Instant::now());
    }

    /// Mirror controller events into the view
    fn apply_events(&mut self, now: Instant) {
        for event in self.controller.take_events() {
            self.grid.apply(&event);
            match event {
                GameEvent::GameWon { player } => {
                    self.schedule(format!("Player {} won!", player.number()), now);
                }
                GameEvent::GameTied => self.schedule("TIE!".to_string(), now),
                GameEvent::BoardCleared => {
                    self.announcement = None;
                    self.message = Some("New game started!".to_string());
                }
                GameEvent::PiecePlaced { .. } => {}
            }
        }
    }

    fn schedule(&mut self, text: String, now: Instant) {
        let due = now.checked_add(self.announce_delay).unwrap_or(now);
        self.announcement = Some(Announcement { text, due });
    }

    /// Announced outcome once its delay has passed
    fn announced(&self, now: Instant) -> Option<&str> {
        self.announcement
            .as_ref()
            .filter(|a| now >= a.due)
            .map(|a| a.text.as_str())
    }

    fn update(&mut self, now: Instant) {
        let due = self.announced(now).map(str::to_owned);
        if due.is_some() && self.message != due {
            self.message = due;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let turn = if self.controller.status().is_terminal() {
            Turn::Over
        } else {
            Turn::Playing(self.controller.current_player())
        };
        let message = self
            .message
            .as_deref()
            .or_else(|| self.announced(Instant::now()));
        game_view::render(frame, &self.grid, turn, self.selected_column, message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Board::default(), &UiConfig::default())
    }
}
