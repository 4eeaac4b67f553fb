//! Raw-mode terminal sessions and the key-polling waiter.

use asciigol::run::{Flow, Waiter};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::ResetColor,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

/// Puts the terminal in raw mode until dropped.
///
/// Dropping restores the terminal on every exit path, including errors
/// raised while the session was still being set up.
#[derive(Debug)]
pub(crate) struct TerminalSession {
    alternate: bool,
}

impl TerminalSession {
    /// Raw mode with a hidden cursor on the normal screen.
    pub(crate) fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { alternate: false };
        execute!(stdout(), Hide)?;
        Ok(session)
    }

    /// Raw mode on the alternate screen, for full-screen interfaces.
    pub(crate) fn start_alternate() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { alternate: true };
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(session)
    }
}

/// Queue the commands that undo a session's screen changes.
fn write_restore<W: Write>(out: &mut W, alternate: bool) -> io::Result<()> {
    queue!(out, ResetColor, Show)?;
    if alternate {
        queue!(out, LeaveAlternateScreen)?;
    }
    out.flush()
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // each step runs even if an earlier one failed
        let _ = write_restore(&mut stdout(), self.alternate);
        let _ = disable_raw_mode();
    }
}

/// Sleeps between frames while watching for `q`, `Esc` or Ctrl-C.
#[derive(Debug, Default)]
pub(crate) struct KeyWaiter;

impl Waiter for KeyWaiter {
    fn wait(&mut self, delay: Duration) -> io::Result<Flow> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(Flow::Continue);
            }
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && is_stop_key(key.code, key.modifiers)
            {
                return Ok(Flow::Stop);
            }
        }
    }
}

fn is_stop_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
