use serde::{Deserialize, Serialize};

/// Default per-command timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Top-level `.lab-verify.toml` layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// External test and lint commands used by the dynamic checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Test command; the test file path is appended as the final argument.
    #[serde(default = "default_test_command")]
    pub test_command: Vec<String>,

    /// Lint command, run without a target path.
    #[serde(default = "default_lint_command")]
    pub lint_command: Vec<String>,

    /// Seconds before a running command is killed and reported as failed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            test_command: default_test_command(),
            lint_command: default_lint_command(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_test_command() -> Vec<String> {
    vec!["bun".to_string(), "test".to_string()]
}

fn default_lint_command() -> Vec<String> {
    vec!["bun".to_string(), "run".to_string(), "lint".to_string()]
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
