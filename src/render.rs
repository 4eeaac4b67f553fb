//! ANSI frame renderer for terminal viewing.

use crate::grid::Grid;
use crate::run::{Frame, Renderer};
use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    queue,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Default character for a live cell.
pub const DEFAULT_LIVE_CHAR: char = '#';
/// Default character for a dead cell.
pub const DEFAULT_DEAD_CHAR: char = ' ';

/// Background color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Terminal default colors.
    #[default]
    None,
    /// Black text on a white background.
    Light,
    /// White text on a black background.
    Dark,
}

impl Background {
    /// Colors for a cell, or `None` to use the terminal defaults.
    ///
    /// `inverted` swaps the pair; it is used for dead cells when live and
    /// dead cells share a character.
    #[must_use]
    pub const fn colors(self, inverted: bool) -> Option<Colors> {
        let light = Colors {
            foreground: Some(Color::Black),
            background: Some(Color::White),
        };
        let dark = Colors {
            foreground: Some(Color::White),
            background: Some(Color::Black),
        };
        match (self, inverted) {
            (Self::None, _) => None,
            (Self::Light, false) | (Self::Dark, true) => Some(light),
            (Self::Dark, false) | (Self::Light, true) => Some(dark),
        }
    }
}

/// How cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    /// Character for live cells.
    pub live_char: char,
    /// Character for dead cells.
    pub dead_char: char,
    /// Background color mode.
    pub background: Background,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            live_char: DEFAULT_LIVE_CHAR,
            dead_char: DEFAULT_DEAD_CHAR,
            background: Background::None,
        }
    }
}

impl CellStyle {
    fn char_for(&self, alive: bool) -> char {
        if alive { self.live_char } else { self.dead_char }
    }

    fn colors_for(&self, alive: bool) -> Option<Colors> {
        let inverted = !alive && self.live_char == self.dead_char;
        self.background.colors(inverted)
    }
}

/// Queue one frame: cursor home, then every row, resetting attributes at
/// the end of each row. Does not flush.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_frame<W: Write>(out: &mut W, grid: &Grid, style: &CellStyle) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    let mut line = String::with_capacity(usize::from(grid.width()));
    for row in grid.rows() {
        if style.background == Background::None {
            line.clear();
            line.extend(row.iter().map(|&alive| style.char_for(alive)));
            queue!(out, Print(&line))?;
        } else {
            for &alive in row {
                if let Some(colors) = style.colors_for(alive) {
                    queue!(out, SetColors(colors))?;
                }
                queue!(out, Print(style.char_for(alive)))?;
            }
        }
        queue!(out, ResetColor, MoveToNextLine(1))?;
    }
    Ok(())
}

/// Renderer that draws frames to a terminal-like writer.
///
/// The screen is cleared before the first frame only; later frames
/// overwrite in place.
#[derive(Debug)]
pub struct AnsiRenderer<W: Write> {
    out: W,
    style: CellStyle,
    cleared: bool,
}

impl<W: Write> AnsiRenderer<W> {
    /// Create a renderer writing to `out`.
    #[must_use]
    pub fn new(out: W, style: CellStyle) -> Self {
        Self {
            out,
            style,
            cleared: false,
        }
    }

    /// The style used for cells.
    #[must_use]
    pub const fn style(&self) -> &CellStyle {
        &self.style
    }

    /// Recover the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        if !self.cleared {
            queue!(self.out, Clear(ClearType::All))?;
            self.cleared = true;
        }
        write_frame(&mut self.out, frame.grid, &self.style)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    /// Drop CSI escape sequences, keeping printed characters.
    fn visible(bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // ESC [ params final-byte
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn sample() -> Grid {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(Coord::new(0, 0), true);
        grid.set(Coord::new(1, 2), true);
        grid
    }

    #[test]
    fn test_frame_plain() {
        let mut out = Vec::new();
        write_frame(&mut out, &sample(), &CellStyle::default()).unwrap();
        assert_eq!(visible(&out), "#    #");
    }

    #[test]
    fn test_frame_custom_chars() {
        let style = CellStyle {
            live_char: 'o',
            dead_char: '.',
            background: Background::Dark,
        };
        let mut out = Vec::new();
        write_frame(&mut out, &sample(), &style).unwrap();
        assert_eq!(visible(&out), "o....o");
    }

    #[test]
    fn test_background_inversion_for_identical_chars() {
        let style = CellStyle {
            live_char: '@',
            dead_char: '@',
            background: Background::Light,
        };
        assert_eq!(style.colors_for(true), Background::Light.colors(false));
        assert_eq!(style.colors_for(false), Background::Dark.colors(false));
        assert_eq!(Background::None.colors(true), None);
    }

    #[test]
    fn test_renderer_keeps_style() {
        let style = CellStyle {
            live_char: '*',
            dead_char: '-',
            background: Background::Dark,
        };
        let renderer = AnsiRenderer::new(Vec::new(), style);
        assert_eq!(renderer.style(), &style);
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_renderer_clears_once() {
        let grid = sample();
        let mut renderer = AnsiRenderer::new(Vec::new(), CellStyle::default());
        let frame = Frame { grid: &grid, generation: 0 };
        renderer.render(&frame).unwrap();
        let first = renderer.out.len();
        renderer.render(&frame).unwrap();
        let second = renderer.out.len() - first;
        assert!(first > second);
        let clear = b"\x1b[2J";
        let clears = renderer
            .into_inner()
            .windows(clear.len())
            .filter(|w| *w == clear)
            .count();
        assert_eq!(clears, 1);
    }
}
