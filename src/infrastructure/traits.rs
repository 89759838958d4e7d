//! I/O boundary traits for testability
//!
//! The game talks to the player only through [`Interaction`], allowing
//! services to be tested with scripted implementations.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::{debug, trace};

use crate::domain::answer::{clean_line, parse_yes_no};

/// Player interaction abstraction.
pub trait Interaction {
    /// Show `prompt` and block until a yes/no answer is typed.
    ///
    /// Malformed answers re-prompt. End of input is reported as
    /// `io::ErrorKind::UnexpectedEof`.
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool>;

    /// Show `prompt` and read one line without its terminator.
    fn ask_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Show a message that needs no answer.
    fn tell(&mut self, message: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Line-based interaction over any reader/writer pair.
#[derive(Debug)]
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
}

impl ConsoleInteraction<BufReader<Stdin>, Stdout> {
    /// Interaction over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        trace!("read: {:?}", line);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            self.show(&format!("{} [y/n]?", prompt))?;
            let line = self.read_line()?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => debug!("not a yes/no answer: {:?}", clean_line(&line)),
            }
        }
    }

    fn ask_text(&mut self, prompt: &str) -> io::Result<String> {
        self.show(prompt)?;
        let line = self.read_line()?;
        Ok(clean_line(&line).to_string())
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }
}
