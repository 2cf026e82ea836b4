//! Line-mode terminal I/O for the navigator
//!
//! A [`Console`] bundles the line reader, the output writer and the palette.
//! The binary uses standard input/output; tests drive the same code through a
//! `Cursor` and a `Vec<u8>`.

use crate::error::{MenuError, Result};
use crate::theme::Palette;
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Color;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Input and output streams used by the menus
pub struct Console<'io> {
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
    palette: Palette,
}

impl Console<'static> {
    /// Console attached to the process' standard streams
    pub fn stdio(palette: Palette) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), palette)
    }
}

impl<'io> Console<'io> {
    pub fn new(input: impl BufRead + 'io, output: impl Write + 'io, palette: Palette) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Raw writer for body renderers
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Write a pre-rendered text block as-is.
    pub fn write_block(&mut self, block: &str) -> io::Result<()> {
        self.output.write_all(block.as_bytes())
    }

    /// Show `prompt` and block until one line is available.
    ///
    /// The returned line has its line terminator removed but is otherwise
    /// untouched; bytes that are not UTF-8 are replaced, never rejected.
    /// End of input is reported as [`MenuError::InputClosed`].
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Clear the terminal and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.output
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(0, 0))?;
        self.output.flush()
    }

    pub fn print_ok(&mut self, msg: &str) {
        self.notice(msg, self.palette.ok);
    }

    pub fn print_info(&mut self, msg: &str) {
        self.notice(msg, self.palette.info);
    }

    pub fn print_warn(&mut self, msg: &str) {
        self.notice(msg, self.palette.warning);
    }

    pub fn print_error(&mut self, msg: &str) {
        self.notice(msg, self.palette.error);
    }

    /// Notices are best effort: a failed write is logged, not propagated.
    fn notice(&mut self, msg: &str, color: Color) {
        let line = self.palette.paint(msg, color);
        let result = writeln!(self.output, "{line}").and_then(|()| self.output.flush());
        if let Err(e) = result {
            warn!("Failed to write notice to terminal: {}", e);
        }
    }
}
