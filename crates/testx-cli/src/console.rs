//! Line-oriented terminal access shared by the menus.

use std::io::{self, BufRead, Write};

/// A prompt/answer pair over any reader and writer.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print `message` without a newline and read one trimmed line.
    ///
    /// Returns `None` when the input is closed.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn out(&mut self) -> &mut O {
        &mut self.output
    }

    /// Both halves at once, for handing the terminal to the quiz engine.
    pub fn split(&mut self) -> (&mut I, &mut O) {
        (&mut self.input, &mut self.output)
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_trims_and_detects_eof() {
        let mut console = Console::new(Cursor::new("  2 \n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("2"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "> > \n");
    }
}
