//! Line-oriented terminal I/O.

use crate::config::ClearStyle;
use anyhow::{Context, Result};
use crossterm::{cursor::MoveTo, execute, terminal::Clear, terminal::ClearType};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Where prompts go and answers come from.
pub trait Prompt {
    /// Prints a line.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Prints `question` without a newline and reads one answer.
    ///
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Clears the screen.
    fn clear(&mut self, style: ClearStyle, lines: usize) -> Result<()>;
}

/// A [`Prompt`] over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    #[instrument(skip(self))]
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[instrument(skip(self))]
    fn clear(&mut self, style: ClearStyle, lines: usize) -> Result<()> {
        match style {
            ClearStyle::Newlines => {
                write!(self.output, "{}", "\n".repeat(lines)).context("Failed to write output")
            }
            ClearStyle::Terminal => {
                execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                    .context("Failed to clear terminal")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_line_and_detects_eof() {
        let mut console = Console::new(Cursor::new("e5\r\n"), Vec::new());
        assert_eq!(console.ask("> ").unwrap(), Some("e5".to_string()));
        assert_eq!(console.ask("> ").unwrap(), None);

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "> > ");
    }

    #[test]
    fn test_clear_with_newlines() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.clear(ClearStyle::Newlines, 3).unwrap();
        let (_, output) = console.into_parts();
        assert_eq!(output, b"\n\n\n");
    }

    #[test]
    fn test_clear_terminal_emits_escape() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.clear(ClearStyle::Terminal, 0).unwrap();
        let (_, output) = console.into_parts();
        assert!(output.starts_with(b"\x1b["));
    }
}
