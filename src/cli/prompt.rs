//! Line-based interactive prompts.
//!
//! Generic over the reader and writer so commands can be driven from a
//! script in tests.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Print `prompt` and read one trimmed line.
    ///
    /// Running out of input is an error so a closed stdin cannot loop
    /// forever on a reprompt.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as a non-negative integer.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            match self.ask(prompt)?.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Ask until the answer is an integer within `range`.
    pub fn ask_number_in(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
        hint: &str,
    ) -> io::Result<u32> {
        loop {
            match self.ask(prompt)?.parse::<u32>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => self.say(hint)?,
            }
        }
    }

    /// Ask a yes/no question; anything starting with `y` is yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.to_lowercase().starts_with('y'))
    }
}
