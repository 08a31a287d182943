//! Interactive read-eval-print loop over a canvas.
//!
//! A [`Session`] reads commands line by line from any [`BufRead`], applies
//! them to its [`Canvas`] and writes rendered rows and error messages to any
//! [`Write`]. Bad commands are reported and skipped; only I/O failures end
//! the loop early.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::command::{describe_error, parse_command, usage_banner, Command};
use crate::config::SessionConfig;
use crate::error::Result;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Command loop bound to one canvas.
#[derive(Debug)]
pub struct Session<R, W> {
    canvas: Canvas,
    input: R,
    output: W,
    prompt: String,
    banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the default prompt and banner.
    pub fn new(canvas: Canvas, input: R, output: W) -> Self {
        Self::with_config(&SessionConfig::default(), canvas, input, output)
    }

    /// Create a session from configuration.
    pub fn with_config(config: &SessionConfig, canvas: Canvas, input: R, output: W) -> Self {
        Self {
            canvas,
            input,
            output,
            prompt: config.prompt.clone(),
            banner: config.banner,
        }
    }

    /// Set the prompt written before each command.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable the start-up command summary.
    #[must_use]
    pub fn banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// The canvas being edited.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Consume the session, returning the canvas and output sink.
    pub fn into_parts(self) -> (Canvas, W) {
        (self.canvas, self.output)
    }

    /// Run until `quit`/`exit` or end of input.
    ///
    /// Returns the number of commands executed successfully.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<usize> {
        if self.banner {
            self.output.write_all(usage_banner().as_bytes())?;
        }

        let mut executed = 0;
        let mut line = String::new();
        loop {
            self.output.write_all(self.prompt.as_bytes())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    executed += 1;
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => {
                    debug!(line = line.trim_end(), %err, "command rejected");
                    writeln!(self.output, "{}", describe_error(&err))?;
                }
            }
        }

        self.output.flush()?;
        info!(executed, shapes = self.canvas.len(), "session finished");
        Ok(executed)
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add(shape) => self.canvas.add_shape(shape),
            Command::Show => {
                for row in self.canvas.render() {
                    writeln!(self.output, "{row}")?;
                }
            }
            Command::Clear => self.canvas.clear(),
            Command::Help => self.output.write_all(usage_banner().as_bytes())?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
