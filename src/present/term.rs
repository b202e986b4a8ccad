//! Terminal presenter: paints frames as true-color ANSI via crossterm.
//!
//! All output for one frame is accumulated in a pre-allocated byte buffer
//! and flushed in a single `write` syscall to prevent flickering.

use super::frame::Frame;
use crate::grid::{Palette, Rgb};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// The presentation consumer seam.
///
/// Receives each finished frame once, immediately after the render loop's
/// swap, together with the active palette. Implementations run on the
/// presenter actor's thread and may take as long as they like — a slow
/// presenter drops frames, it never stalls the render loop.
pub trait Presenter: Send {
    /// Paint one frame.
    fn present(&mut self, frame: &Frame, palette: &Palette) -> io::Result<()>;
}

/// Crossterm-backed presenter: alternate screen, raw mode, hidden cursor,
/// one buffered write per frame.
///
/// Terminal state is restored on drop.
pub struct TermPresenter {
    stdout: Stdout,
    /// Pre-allocated ANSI output buffer, reused every frame.
    output: Vec<u8>,
}

impl TermPresenter {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            stdout,
            output: Vec::with_capacity(65536),
        })
    }

    fn push_fg(output: &mut Vec<u8>, color: Rgb) {
        // CSI 38;2;r;g;b m
        let _ = write!(output, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    fn push_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
        // CSI row ; col H (1-indexed)
        let _ = write!(output, "\x1b[{};{}H", y + 1, x + 1);
    }
}

impl Presenter for TermPresenter {
    fn present(&mut self, frame: &Frame, palette: &Palette) -> io::Result<()> {
        self.output.clear();

        let mut utf8 = [0u8; 4];
        let mut last_color: Option<u8> = None;
        for y in 0..frame.height {
            Self::push_cursor_move(&mut self.output, 0, y);
            for x in 0..frame.width {
                let idx = usize::from(y) * usize::from(frame.width) + usize::from(x);
                let color = frame.colors[idx];
                if last_color != Some(color) {
                    Self::push_fg(&mut self.output, palette.color(color));
                    last_color = Some(color);
                }
                self.output
                    .extend_from_slice(frame.chars[idx].encode_utf8(&mut utf8).as_bytes());
            }
        }
        self.output.extend_from_slice(b"\x1b[0m");

        self.stdout.write_all(&self.output)?;
        self.stdout.flush()
    }
}

impl Drop for TermPresenter {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};

    // A presenter that just records what it was handed.
    struct RecordingPresenter {
        pub frames: Vec<Frame>,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, frame: &Frame, _palette: &Palette) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    #[test]
    fn test_presenter_trait_object() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, Cell::new('H', 1));
        let frame = Frame::from_grid(&grid);
        let palette = Palette::default();

        let mut recorder = RecordingPresenter { frames: Vec::new() };
        let presenter: &mut dyn Presenter = &mut recorder;
        presenter.present(&frame, &palette).unwrap();
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0].char_at(0, 0), Some('H'));
    }

    #[test]
    fn test_ansi_helpers() {
        let mut out = Vec::new();
        TermPresenter::push_cursor_move(&mut out, 0, 2);
        assert_eq!(out, b"\x1b[3;1H");
        out.clear();
        TermPresenter::push_fg(&mut out, Rgb::new(1, 2, 3));
        assert_eq!(out, b"\x1b[38;2;1;2;3m");
    }
}
