//! Presenter: maps engine state to what the player actually sees and
//! renders it as a terminal grid.

use gridmine_core::{Coord, Coord2, Game, GameStatus};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Player-visible state of one cell.
///
/// While the game runs this is a straight projection of the cell. On a
/// finished board the whole field is disclosed: unflagged mines show up
/// as `Mine`, the losing cell as `TriggeredMine`, and flags that sat on
/// a safe cell as `Misflagged`, so they stay distinguishable from
/// ordinary revealed cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewCell {
    Hidden,
    Revealed(u8),
    Flagged,
    Mine,
    TriggeredMine,
    Misflagged,
}

pub fn view_cell(game: &Game, coords: Coord2) -> ViewCell {
    let cell = game.cell_at(coords);

    match game.status() {
        GameStatus::InProgress => {
            if cell.is_revealed {
                ViewCell::Revealed(cell.adjacent_mines)
            } else if cell.is_flagged {
                ViewCell::Flagged
            } else {
                ViewCell::Hidden
            }
        }
        GameStatus::Won => {
            // Every safe cell is revealed; the mines get flags.
            if cell.is_mine {
                ViewCell::Flagged
            } else {
                ViewCell::Revealed(cell.adjacent_mines)
            }
        }
        GameStatus::Lost => {
            if game.triggered_mine() == Some(coords) {
                ViewCell::TriggeredMine
            } else if cell.is_mine {
                if cell.is_flagged {
                    ViewCell::Flagged
                } else {
                    ViewCell::Mine
                }
            } else if cell.is_flagged {
                ViewCell::Misflagged
            } else {
                ViewCell::Revealed(cell.adjacent_mines)
            }
        }
    }
}

/// Overlay text for a finished session, hidden otherwise.
pub fn overlay_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("You Win!"),
        GameStatus::Lost => Some("Game Over!"),
    }
}

/// Maps a terminal mouse position to a board cell. Cells are two
/// terminal columns wide.
pub fn hit_test(grid: Rect, column: u16, row: u16, size: Coord2) -> Option<Coord2> {
    if column < grid.x || row < grid.y {
        return None;
    }
    if column >= grid.x + grid.width || row >= grid.y + grid.height {
        return None;
    }

    let board_col = (column - grid.x) / 2;
    let board_row = row - grid.y;
    if board_row >= u16::from(size.0) || board_col >= u16::from(size.1) {
        return None;
    }
    Some((board_row as Coord, board_col as Coord))
}

/// Renders one frame and returns the rect the grid landed in, which the
/// event loop feeds back into [`hit_test`].
pub fn draw(frame: &mut Frame, game: &Game, cursor: Coord2) -> Rect {
    let area = frame.area();
    let (rows, cols) = game.size();
    let config = game.config();

    let header = Rect {
        height: 2.min(area.height),
        ..area
    };
    let grid = Rect {
        x: area.x + area.width.saturating_sub(u16::from(cols) * 2) / 2,
        y: area.y + header.height,
        width: u16::from(cols) * 2,
        height: u16::from(rows),
    }
    .intersection(area);
    let footer = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };

    let title = format!(
        "gridmine  {rows}x{cols}, {} mines  [mines left: {}]",
        config.mines,
        game.mines_left()
    );
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        header,
    );

    let mut lines = Vec::with_capacity(usize::from(rows));
    for row in 0..rows {
        let mut spans = Vec::with_capacity(usize::from(cols));
        for col in 0..cols {
            let coords = (row, col);
            let highlight = coords == cursor && !game.is_finished();
            spans.push(cell_span(view_cell(game, coords), highlight));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), grid);

    frame.render_widget(
        Paragraph::new("reveal: click/space  flag: right-click/f  r: restart  s: size  q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        footer,
    );

    if let Some(message) = overlay_message(game.status()) {
        draw_overlay(frame, area, message);
    }

    grid
}

fn draw_overlay(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.len() as u16 + 6).max(24).min(area.width);
    let height = 4.min(area.height);
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                message,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("press r for a new game"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL)),
        overlay,
    );
}

fn cell_span(view: ViewCell, highlight: bool) -> Span<'static> {
    let (text, mut style) = match view {
        ViewCell::Hidden => ("▒▒".to_string(), Style::default().fg(Color::DarkGray)),
        ViewCell::Revealed(0) => ("  ".to_string(), Style::default()),
        ViewCell::Revealed(count) => (format!("{count} "), number_style(count)),
        ViewCell::Flagged => (
            "F ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        ViewCell::Mine => ("* ".to_string(), Style::default().fg(Color::White)),
        ViewCell::TriggeredMine => (
            "* ".to_string(),
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        ViewCell::Misflagged => ("X ".to_string(), Style::default().fg(Color::Red)),
    };
    if highlight {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn number_style(count: u8) -> Style {
    let color = match count {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::Magenta,
        5 => Color::LightRed,
        6 => Color::Cyan,
        7 => Color::Yellow,
        _ => Color::Gray,
    };
    Style::default().fg(color)
}
