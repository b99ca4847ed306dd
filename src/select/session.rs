//! Interactive selector session
//!
//! Drives the external fuzzy finder as a producer/consumer pipe pair. The
//! finder owns the terminal (stderr is inherited); this process only talks
//! to its stdin and stdout.

use super::codec;
use crate::error::Error;
use anyhow::{Context, Result};
use std::io::{ErrorKind, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Exit status fzf reports when the user interrupts with ctrl-c or esc
const INTERRUPT_CODE: i32 = 130;

/// One run of the external selector: stream candidates in, collect the
/// chosen lines, interpret the exit status.
pub struct SelectorSession {
    program: String,
    args: Vec<String>,
}

impl SelectorSession {
    pub fn new() -> Self {
        Self {
            program: "fzf-tmux".to_string(),
            args: vec!["--no-hscroll".to_string(), "-m".to_string()],
        }
    }

    /// Run a different selector binary with the standard multi-select flags
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the whole invocation (used by tests)
    pub fn with_command(mut self, program: impl Into<String>, args: &[&str]) -> Self {
        self.program = program.into();
        self.args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Stream `lines` to the selector and return the chosen paths, in
    /// selection order. A user interrupt yields an empty selection, not an
    /// error.
    pub fn run(&self, lines: Vec<String>) -> Result<Vec<String>> {
        log::debug!("Launching selector: {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to launch selector '{}'", self.program))?;

        let mut stdin = child.stdin.take().context("selector stdin not piped")?;
        let mut stdout = child.stdout.take().context("selector stdout not piped")?;

        // Feed candidates from a second thread while this one drains the
        // selector's output. A sequential write-then-read deadlocks once
        // either pipe buffer fills.
        let writer = thread::spawn(move || -> std::io::Result<()> {
            for line in &lines {
                match writeln!(stdin, "{}", line) {
                    Ok(()) => {}
                    // The user can confirm before the whole library has been
                    // written; the selector closing its end is not an error.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        });

        let mut output = String::new();
        stdout
            .read_to_string(&mut output)
            .context("Failed to read selector output")?;

        match writer.join() {
            Ok(result) => result.context("Failed to stream candidates to selector")?,
            Err(_) => anyhow::bail!("selector writer thread panicked"),
        }

        let status = child.wait().context("Failed to wait for selector")?;
        match status.code() {
            Some(0) => Ok(codec::decode(&output)),
            Some(INTERRUPT_CODE) => {
                log::debug!("Selection cancelled by user");
                Ok(Vec::new())
            }
            _ => Err(Error::ToolFailed {
                tool: self.program.clone(),
                status,
            }
            .into()),
        }
    }
}

impl Default for SelectorSession {
    fn default() -> Self {
        Self::new()
    }
}
