//! Human player reading moves from a line-oriented input.

use super::Participant;
use anyhow::{Context, Result};
use std::io::{BufRead, Read, Stdout, Write};
use strictly_dots::{Match, Move};
use tracing::{debug, instrument, warn};

/// Line reader over the process's standard input.
///
/// Stdin is locked only while a single line is read, so any number of
/// readers (and other code on the same thread) can share it.
#[derive(Debug, Default)]
pub struct ConsoleInput {
    line: Vec<u8>,
    pos: usize,
}

impl Read for ConsoleInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ConsoleInput {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            std::io::stdin().lock().read_until(b'\n', &mut self.line)?;
        }
        Ok(&self.line[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

/// Human player typing moves such as `h 0 1` or `v 2 3`.
///
/// Unreadable lines are reported on the output and the prompt repeats.
/// `q` or `quit` gives up the match. End of input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        Ok((read > 0).then_some(line))
    }
}

impl HumanPlayer<ConsoleInput, Stdout> {
    /// Creates a human player on the terminal.
    pub fn console(name: impl Into<String>) -> Self {
        Self::new(name, ConsoleInput::default(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Participant for HumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose_move(&mut self, game: &Match) -> Result<Option<Move>> {
        loop {
            write!(
                self.output,
                "{} [{} open] move (h|v row col, q to quit): ",
                self.name,
                game.board().legal_moves().len()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                anyhow::bail!("Input closed before {} chose a move", self.name);
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                debug!("Player quit");
                return Ok(None);
            }

            match line.parse::<Move>() {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn move_rejected(&mut self, mv: Move, reason: &str) {
        if let Err(e) = writeln!(self.output, "Cannot play {}: {}", mv, reason) {
            warn!(error = %e, "Failed to report rejected move");
        }
    }
}
