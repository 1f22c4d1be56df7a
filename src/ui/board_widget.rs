use crate::game::{GameEvent, Player};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// The renderer's copy of the grid, kept in sync purely from [`GameEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<Player>>,
}

impl ViewGrid {
    pub fn new(width: usize, height: usize) -> Self {
        ViewGrid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.width + col]
    }

    /// Mirror a grid-affecting event; outcome events leave the grid alone.
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PiecePlaced {
                row,
                column,
                player,
            } => {
                if row < self.height && column < self.width {
                    self.cells[row * self.width + column] = Some(player);
                }
            }
            GameEvent::BoardCleared => self.cells.fill(None),
            GameEvent::GameWon { .. } | GameEvent::GameTied => {}
        }
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Styled spans for one row of the grid.
pub fn row_spans(grid: &ViewGrid, row: usize) -> Vec<Span<'static>> {
    (0..grid.width())
        .map(|col| match grid.get(row, col) {
            None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            Some(player) => Span::styled(" \u{25cf} ", Style::default().fg(player_color(player))),
        })
        .collect()
}
