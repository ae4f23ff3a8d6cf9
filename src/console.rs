use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use thiserror::Error;

use ds::Value;

#[derive(Error, Debug)]
#[error("{msg}")]
pub struct PromptError {
    msg: String
}

impl PromptError {
    pub fn new<M: Into<String>>(msg: M) -> Self {
        Self { msg: msg.into() }
    }
}

/// Line oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    pub fn ask_value(&mut self, prompt: &str) -> Result<Value> {
        write!(self.output, "{}: ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("stdin failed")?;
        if read == 0 {
            bail!(PromptError::new(format!("Input ended while waiting for '{}'", prompt)));
        }

        let text = line.trim();
        text.parse::<Value>()
            .map_err(|_| PromptError::new(format!("'{}' is not an integer", text)))
            .with_context(|| format!("Failed to read '{}'", prompt))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
