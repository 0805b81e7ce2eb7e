//! Batch session over a stream of command lines
//!
//! Blank lines and lines starting with `#` are skipped. Each `check` answer
//! is written on its own line; rejected commands are collected in the
//! [`SessionReport`] and logged, never written to the answer stream. A line
//! that is not valid UTF-8 is rejected like any other bad command.

use crate::router::{CommandRouter, VersionSystem};
use clones_forest::ForestConfig;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Forest limits
    pub forest: ForestConfig,
    /// Stop at the first rejected command
    pub stop_on_error: bool,
    /// Write rejected commands through [`Session::echo_rejections`]
    pub echo_errors: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            forest: ForestConfig::default(),
            stop_on_error: false,
            echo_errors: true,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_forest(mut self, forest: ForestConfig) -> Self {
        self.forest = forest;
        self
    }

    #[must_use]
    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    #[must_use]
    pub fn with_echo_errors(mut self, echo: bool) -> Self {
        self.echo_errors = echo;
        self
    }
}

/// A command the system refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedCommand {
    /// 1-based input line number
    pub line: usize,
    pub command: String,
    pub message: String,
}

/// Outcome of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Commands executed (accepted or rejected)
    pub commands: usize,
    /// `check` answers written
    pub answers: usize,
    pub rejected: Vec<RejectedCommand>,
    /// True if `stop_on_error` cut the input short
    pub stopped_early: bool,
}

impl SessionReport {
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Runs command streams against one [`VersionSystem`]
#[derive(Debug)]
pub struct Session<S = CommandRouter> {
    system: S,
    config: SessionConfig,
}

impl Session<CommandRouter> {
    /// Session over a fresh forest
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_system(CommandRouter::with_config(config.forest), config)
    }
}

impl<S: VersionSystem> Session<S> {
    #[must_use]
    pub fn with_system(system: S, config: SessionConfig) -> Self {
        Self { system, config }
    }

    #[inline]
    #[must_use]
    pub fn system(&self) -> &S {
        &self.system
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Write one `line N: command: message` entry per rejection
    ///
    /// Writes nothing when `echo_errors` is off. Returns the number of entries written.
    ///
    /// # Errors
    /// Returns error on I/O failure
    pub fn echo_rejections<W: Write>(
        &self,
        report: &SessionReport,
        mut writer: W,
    ) -> io::Result<usize> {
        if !self.config.echo_errors {
            return Ok(0);
        }
        for rejected in &report.rejected {
            writeln!(
                writer,
                "line {}: {}: {}",
                rejected.line, rejected.command, rejected.message
            )?;
        }
        writer.flush()?;
        Ok(report.rejected.len())
    }

    /// Execute every line of `reader`, writing answers to `writer`
    ///
    /// State carries over between calls.
    ///
    /// # Errors
    /// Returns error only on I/O failure; rejected commands go in the report
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> io::Result<SessionReport> {
        let mut report = SessionReport::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let rejection = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let query = line.trim();
                    if query.is_empty() || query.starts_with('#') {
                        continue;
                    }
                    report.commands += 1;
                    match self.system.execute(query) {
                        Ok(Some(answer)) => {
                            writeln!(writer, "{answer}")?;
                            report.answers += 1;
                            None
                        }
                        Ok(None) => None,
                        Err(e) => Some((query.to_string(), e.to_string())),
                    }
                }
                Err(e) => {
                    report.commands += 1;
                    let command = String::from_utf8_lossy(&buf).trim().to_string();
                    Some((command, format!("line is not valid UTF-8: {e}")))
                }
            };

            if let Some((command, message)) = rejection {
                tracing::warn!(line = line_number, %command, %message, "command rejected");
                report.rejected.push(RejectedCommand {
                    line: line_number,
                    command,
                    message,
                });
                if self.config.stop_on_error {
                    report.stopped_early = true;
                    break;
                }
            }
        }

        writer.flush()?;
        tracing::info!(
            commands = report.commands,
            answers = report.answers,
            rejected = report.rejected.len(),
            "session finished"
        );
        Ok(report)
    }
}
