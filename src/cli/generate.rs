//! Gen command implementation - interactive configuration editor.

#![allow(clippy::needless_pass_by_value)]

use super::terminal::TerminalSession;
use super::{CellArg, CliError};
use asciigol::config;
use asciigol::editor::{Direction as Move, Editor, EditorCommand, EditorStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::path::{Path, PathBuf};

/// Execute the gen command.
///
/// # Errors
///
/// Returns an error if the dimensions are invalid, the TUI fails, or the
/// file cannot be written.
pub(crate) fn execute(file: PathBuf, width: u16, height: u16, cell: CellArg) -> Result<(), CliError> {
    let editor = Editor::new(width, height, cell.is_alive())
        .map_err(|e| CliError::new(e.to_string()))?;

    let (editor, status) = run_tui(editor, &file)?;

    match status {
        EditorStatus::Save => {
            config::save(&file, editor.grid()).map_err(|e| {
                CliError::new(format!("Failed to write {}: {e}", file.display()))
            })?;
            println!("Saved {}x{} grid to {}", width, height, file.display());
        }
        EditorStatus::Abandon | EditorStatus::Editing => {
            println!("Discarded changes; {} not written", file.display());
        }
    }
    Ok(())
}

fn run_tui(mut editor: Editor, file: &Path) -> Result<(Editor, EditorStatus), CliError> {
    let _session = TerminalSession::start_alternate()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let status = edit_loop(&mut terminal, &mut editor, file)?;
    Ok((editor, status))
}

fn edit_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    editor: &mut Editor,
    file: &Path,
) -> Result<EditorStatus, CliError> {
    loop {
        terminal
            .draw(|f| ui(f, editor, file))
            .map_err(|e| CliError::new(e.to_string()))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = key_to_command(key)
        {
            let status = editor.apply(command);
            if status != EditorStatus::Editing {
                return Ok(status);
            }
        }
    }
}

/// Map a key press to an editor command.
fn key_to_command(key: KeyEvent) -> Option<EditorCommand> {
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => EditorCommand::Move(Move::Up),
        KeyCode::Down | KeyCode::Char('j') => EditorCommand::Move(Move::Down),
        KeyCode::Left | KeyCode::Char('h') => EditorCommand::Move(Move::Left),
        KeyCode::Right | KeyCode::Char('l') => EditorCommand::Move(Move::Right),
        KeyCode::Char('0') => EditorCommand::Set(false),
        KeyCode::Char('1') => EditorCommand::Set(true),
        KeyCode::Char(' ') => EditorCommand::Toggle,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => EditorCommand::Abandon,
        KeyCode::Char('q') => EditorCommand::Save,
        KeyCode::Esc => EditorCommand::Abandon,
        _ => return None,
    };
    Some(command)
}

fn ui(f: &mut Frame, editor: &Editor, file: &Path) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Grid
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], editor, file);
    render_grid(f, chunks[1], editor);
    render_footer(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, editor: &Editor, file: &Path) {
    let grid = editor.grid();
    let cursor = editor.cursor();
    let title = format!(
        " asciigol gen | {} | {}x{} | Row {} Col {} | Live: {} ",
        file.display(),
        grid.width(),
        grid.height(),
        cursor.row,
        cursor.col,
        grid.population()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, editor: &Editor) {
    let cursor = editor.cursor();
    let highlight = Style::default().fg(Color::Green).add_modifier(Modifier::REVERSED);

    let lines: Vec<Line> = editor
        .grid()
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, &alive)| {
                    let ch = if alive { "1" } else { "0" };
                    if usize::from(cursor.row) == row && usize::from(cursor.col) == col {
                        Span::styled(ch, highlight)
                    } else if alive {
                        Span::styled(ch, Style::default().fg(Color::White))
                    } else {
                        Span::styled(ch, Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));

    f.render_widget(grid_widget, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let controls = " [←↑↓→] Move  [0/1] Set  [Space] Toggle  [q] Save & quit  [Esc] Discard ";

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
