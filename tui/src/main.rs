use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gridmine_core::Coord2;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

mod app;
mod storage;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal")]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Where to keep the saved session
    #[arg(short = 'f', long, default_value = storage::DEFAULT_SAVE_FILE)]
    save_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut app = app::App::load_or_new(storage::SaveSlot::new(args.save_file));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut app::App) -> Result<()> {
    let mut cursor: Coord2 = (0, 0);
    let mut grid = Rect::default();

    loop {
        terminal.draw(|frame| grid = view::draw(frame, app.game(), cursor))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let (rows, cols) = app.game().size();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => {
                    app.restart();
                    cursor = (0, 0);
                }
                KeyCode::Char('s') => {
                    app.cycle_size();
                    cursor = (0, 0);
                }
                KeyCode::Up => cursor.0 = cursor.0.saturating_sub(1),
                KeyCode::Down => cursor.0 = (cursor.0 + 1).min(rows - 1),
                KeyCode::Left => cursor.1 = cursor.1.saturating_sub(1),
                KeyCode::Right => cursor.1 = (cursor.1 + 1).min(cols - 1),
                KeyCode::Char(' ') | KeyCode::Enter => app.reveal(cursor),
                KeyCode::Char('f') => app.toggle_flag(cursor),
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(coords) =
                        view::hit_test(grid, mouse.column, mouse.row, app.game().size())
                    {
                        cursor = coords;
                        app.reveal(coords);
                    }
                }
                MouseEventKind::Down(MouseButton::Right) => {
                    if let Some(coords) =
                        view::hit_test(grid, mouse.column, mouse.row, app.game().size())
                    {
                        cursor = coords;
                        app.toggle_flag(coords);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}
