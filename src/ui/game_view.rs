use super::board_widget::{player_color, row_spans, ViewGrid};
use crate::game::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the header shows above the board.
pub enum Turn {
    Playing(Player),
    Over,
}

pub fn render(
    frame: &mut Frame,
    grid: &ViewGrid,
    turn: Turn,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = u16::try_from(grid.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, turn, chunks[0]);
    render_board(frame, grid, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, turn: Turn, area: Rect) {
    let (status, color) = match turn {
        Turn::Playing(player) => (format!("Current Player: {}", player.number()), player_color(player)),
        Turn::Over => ("Game Over".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, grid: &ViewGrid, selected_column: usize, area: Rect) {
    let width = grid.width();
    let border = "\u{2550}".repeat(width * 3 + 1);
    let mut lines = Vec::with_capacity(grid.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  \u{2554}{border}\u{2557}")));

    for row in 0..grid.height() {
        let mut spans = vec![Span::raw("  \u{2551}")];
        spans.extend(row_spans(grid, row));
        spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  \u{255a}{border}\u{255d}")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "\u{2190}/\u{2192}: Move  |  1-9: Column  |  Enter: Drop  |  r: Restart  |  q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
