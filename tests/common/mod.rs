#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lab-verify binary.
#[macro_export]
macro_rules! lab_verify {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lab-verify"))
    };
}

/// A throwaway lab checkout for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".lab-verify.toml", content);
    }

    /// Runner config whose test and lint commands always succeed.
    pub fn use_passing_commands(&self) {
        self.create_config(PASSING_COMMANDS);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const PASSING_COMMANDS: &str = r#"
[runner]
test_command = ["true"]
lint_command = ["true"]
timeout_secs = 30
"#;

pub const FAILING_COMMANDS: &str = r#"
[runner]
test_command = ["false"]
lint_command = ["false"]
timeout_secs = 30
"#;

pub const ADR_COMPLETE: &str = "# ADR: Notification Delivery

## Decision

We will deliver notifications through a background queue consumed by a worker.

## Rationale

The queue decouples request latency from slow email providers and allows retries.

## Consequences

We must operate a worker process and monitor queue depth.
";

pub const ADR_TEMPLATE: &str = "# ADR: Notification Delivery

## Decision

[Use Lab 4 to decide between the two approaches]

## Rationale

The queue decouples request latency from slow email providers and allows retries.

## Consequences

[What are the trade-offs?]
";

pub const DECOMPOSITION_THREE_THREADS: &str = "# Notification Preferences

## Thread Map

The feature splits into independent threads that can run in parallel, with a final
fusion thread to reconcile the API contract and the settings UI.

Thread 1: preferences schema
Thread 2: preferences API
Thread 3: settings UI
";

pub const USERS_FIXED: &str = "export async function getUserPreferences(userId: string) {
  const user = await findUser(userId);
  if (!user) {
    return DEFAULT_PREFERENCES;
  }
  return user.preferences ?? DEFAULT_PREFERENCES;
}
";
