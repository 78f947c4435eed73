//! In-memory collaborators shared by unit tests.

use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::checker::CheckResult;
use crate::config::{FileSystem, RunnerConfig};
use crate::labs::LabContext;
use crate::runner::{CommandRunner, CommandSpec, RunOutcome, TestRunner};

pub const ROOT: &str = "/lab";

pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    unreadable: HashSet<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            unreadable: HashSet::new(),
            config_dir: Some(PathBuf::from("/home/user/.config/lab-verify")),
        }
    }

    /// Add a file at `path`, relative paths are placed under [`ROOT`].
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(resolve(path), content.to_string());
        self
    }

    /// Add a file that exists but fails to read.
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        let path = resolve(path);
        self.files.lock().unwrap().insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    pub fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let normalized = normalize_path(path);
        if self.unreadable.contains(&normalized) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .lock()
            .unwrap()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        self.files.lock().unwrap().contains_key(&normalized)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

fn resolve(path: &str) -> PathBuf {
    if path.starts_with('/') {
        normalize_path(Path::new(path))
    } else {
        normalize_path(&Path::new(ROOT).join(path))
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}

/// Command runner that returns scripted outcomes and records every invocation.
pub struct MockRunner {
    outcomes: HashMap<String, RunOutcome>,
    default: RunOutcome,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Every command succeeds unless scripted otherwise.
    pub fn passing() -> Self {
        Self::with_default(RunOutcome::Succeeded)
    }

    /// Every command fails unless scripted otherwise.
    pub fn failing() -> Self {
        Self::with_default(RunOutcome::Failed(Some(1)))
    }

    fn with_default(default: RunOutcome) -> Self {
        Self {
            outcomes: HashMap::new(),
            default,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the outcome for a full command line such as `bun test tests/a.test.ts`.
    pub fn with_outcome(mut self, command_line: &str, outcome: RunOutcome) -> Self {
        self.outcomes.insert(command_line.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, spec: &CommandSpec) -> RunOutcome {
        let line = spec.to_string();
        self.calls.lock().unwrap().push(line.clone());
        self.outcomes
            .get(&line)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

/// Run a lab check against [`ROOT`] with the default runner configuration.
pub fn run_lab(
    check: fn(&LabContext<'_>) -> Vec<CheckResult>,
    fs: &MockFileSystem,
    runner: &MockRunner,
) -> Vec<CheckResult> {
    let config = RunnerConfig::default();
    let ctx = LabContext::new(Path::new(ROOT), fs, TestRunner::new(runner, &config));
    check(&ctx)
}

/// Messages of failed results, in order.
pub fn failures(results: &[CheckResult]) -> Vec<&str> {
    results
        .iter()
        .filter(|r| r.is_failed())
        .map(|r| r.message.as_str())
        .collect()
}
