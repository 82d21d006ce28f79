use bakery_inventory::inventory::{parse_quantity, Quantity};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line-oriented console I/O. `None` from any `ask*` method means input is exhausted.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints `prompt` without a newline and returns the trimmed reply.
    pub(crate) fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Raw bytes: a stray non-UTF-8 byte is a bad reply, not a dead session.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!(prompt, "input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Re-asks until the reply is a finite, non-negative number.
    pub(crate) fn ask_quantity(&mut self, prompt: &str) -> io::Result<Option<Quantity>> {
        loop {
            let Some(reply) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_quantity(&reply) {
                Ok(quantity) => return Ok(Some(quantity)),
                Err(err) => {
                    debug!(%err, reply = %reply, "quantity rejected");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    /// Yes/no question. Only `y` (in either case) counts as yes.
    pub(crate) fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self
            .ask(prompt)?
            .map(|reply| reply.to_lowercase() == "y"))
    }
}
