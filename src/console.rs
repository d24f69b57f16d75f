//! Line-oriented prompt/response channel.
//!
//! The game core talks to the player through this narrow interface only, so
//! a complete game can run against a scripted transcript in tests. Prompts
//! block indefinitely; there are no hidden deadlines on player input.

use std::io::{self, BufRead, Write};

pub trait Console {
    /// Emit one line to the player.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Block for one line of input, with the trailing newline stripped.
    /// A closed input stream is an error, not an empty line.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Console over the process stdin/stdout.
pub struct StdioConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed at a prompt",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
