//! Test runner adapter: runs external test and lint commands and maps their exit
//! status to a `CheckResult`.
//!
//! Output of the child process is discarded and never reaches the report, so a
//! failing command always produces the same fixed message.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::checker::CheckResult;
use crate::config::RunnerConfig;
use crate::output::ErrorOutput;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a command from `[program, args...]`, appending `extra` arguments.
    ///
    /// Returns `None` if `parts` is empty.
    #[must_use]
    pub fn from_parts(parts: &[String], extra: &[&str]) -> Option<Self> {
        let (program, args) = parts.split_first()?;
        let mut args = args.to_vec();
        args.extend(extra.iter().map(|a| (*a).to_string()));
        Some(Self {
            program: program.clone(),
            args,
        })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a command invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    /// Exited with a non-zero status; `None` if terminated by a signal.
    Failed(Option<i32>),
    SpawnError(String),
    TimedOut,
}

impl RunOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "exited successfully"),
            Self::Failed(Some(code)) => write!(f, "exited with status {code}"),
            Self::Failed(None) => write!(f, "terminated by signal"),
            Self::SpawnError(e) => write!(f, "could not be started: {e}"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Trait for executing external commands (for testability).
pub trait CommandRunner {
    /// Run `spec` to completion. Never panics; every failure is an outcome.
    fn run(&self, spec: &CommandSpec) -> RunOutcome;
}

/// Runs commands as child processes in a fixed working directory.
pub struct ProcessRunner {
    cwd: PathBuf,
    timeout: Duration,
    diagnostics: Option<ErrorOutput>,
}

impl ProcessRunner {
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            cwd: cwd.into(),
            timeout,
            diagnostics: None,
        }
    }

    /// Print each command and its outcome as notes on stderr.
    #[must_use]
    pub fn with_diagnostics(mut self, output: ErrorOutput) -> Self {
        self.diagnostics = Some(output);
        self
    }

    fn note(&self, message: &str) {
        if let Some(output) = &self.diagnostics {
            output.print_note(message);
        }
    }

    fn spawn_and_wait(&self, spec: &CommandSpec) -> RunOutcome {
        let child = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(e) => return RunOutcome::SpawnError(e.to_string()),
        };

        // A timeout too large to represent as an instant means no deadline.
        let deadline = Instant::now().checked_add(self.timeout);
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return RunOutcome::Succeeded,
                Ok(Some(status)) => return RunOutcome::Failed(status.code()),
                Ok(None) if deadline.is_some_and(|deadline| Instant::now() >= deadline) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return RunOutcome::TimedOut;
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return RunOutcome::SpawnError(e.to_string());
                }
            }
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> RunOutcome {
        self.note(&format!("running `{spec}` in {}", self.cwd.display()));
        let outcome = self.spawn_and_wait(spec);
        self.note(&format!("`{spec}` {outcome}"));
        outcome
    }
}

/// Maps test and lint runs onto check results.
pub struct TestRunner<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a RunnerConfig,
}

impl<'a> TestRunner<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn CommandRunner, config: &'a RunnerConfig) -> Self {
        Self { runner, config }
    }

    /// Run the configured test command against `test_path`.
    #[must_use]
    pub fn run_tests(&self, test_path: &str, pass_message: &str, fail_message: &str) -> CheckResult {
        let spec = CommandSpec::from_parts(&self.config.test_command, &[test_path]);
        self.check(spec.as_ref(), pass_message, fail_message)
    }

    /// Run the configured lint command.
    #[must_use]
    pub fn run_lint(&self, pass_message: &str, fail_message: &str) -> CheckResult {
        let spec = CommandSpec::from_parts(&self.config.lint_command, &[]);
        self.check(spec.as_ref(), pass_message, fail_message)
    }

    fn check(&self, spec: Option<&CommandSpec>, pass_message: &str, fail_message: &str) -> CheckResult {
        let succeeded = spec.is_some_and(|spec| self.runner.run(spec).is_success());
        CheckResult::from_condition(succeeded, pass_message, fail_message)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
