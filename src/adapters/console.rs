use crate::domain::ports::SessionIo;
use crate::utils::error::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// [`SessionIo`] over any reader/writer pair. Prompts are written without a
/// trailing newline and flushed before blocking on input.
#[derive(Debug)]
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SessionIo for Console<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !prompt.is_empty() {
            write!(self.output, "{}", prompt)?;
        }
        self.output.flush()?;

        // Bytes, not `read_line`: undecodable input must reach the parser as
        // an invalid number instead of failing the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("input stream closed");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}
