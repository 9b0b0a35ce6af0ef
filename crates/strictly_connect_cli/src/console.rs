//! Line-based terminal input and output.

use crate::render;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use strictly_connect::{Board, CellPrompt, Player, SelectionError};
use tracing::{debug, instrument};

/// Reads answers from `input` and writes prompts and screens to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console that never clears the screen.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables clearing the terminal before each [`refresh`](Self::refresh).
    pub fn with_clearing(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Everything written so far, for buffered outputs.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` and flushes.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Clears the terminal, when enabled, and writes `text`.
    pub fn refresh(&mut self, text: &str) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        }
        self.print(text)
    }

    /// Writes `prompt` and reads one line without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] once input is closed.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        self.print("\n")?;

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Asks until `parse` accepts the answer, printing `invalid` after each rejection.
    #[instrument(skip(self, parse))]
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Some(value) => return Ok(value),
                None => {
                    debug!(input = %line, "Answer rejected");
                    self.print(&format!("{}\n", invalid))?;
                }
            }
        }
    }

    /// Yes/no question; accepts `y`, `yes`, `n` and `no` in any case.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.ask(prompt, "** Invalid option, please reselect!", |line| {
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            }
        })
    }
}

impl<R: BufRead, W: Write> CellPrompt for Console<R, W> {
    #[instrument(skip_all, fields(player = player.number()))]
    fn request_cell(&mut self, board: &Board, player: &Player) -> Result<usize, SelectionError> {
        let to_selection_error = |e: io::Error| SelectionError::Prompt {
            message: e.to_string(),
        };

        self.print(&render::turn_text(player))
            .map_err(to_selection_error)?;
        self.ask(
            "Select cell by number: ",
            "** Invalid cell number, please reselect!",
            |line| {
                line.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|&cell| board.grid().is_available(cell))
            },
        )
        .map_err(to_selection_error)
    }
}
