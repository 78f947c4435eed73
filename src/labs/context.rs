use std::path::{Path, PathBuf};

use crate::checker::CheckResult;
use crate::comment::CommentStripper;
use crate::config::FileSystem;
use crate::runner::TestRunner;

/// What reading a lab file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Missing,
    Unreadable,
    Text(String),
}

/// Collaborators handed to every lab check.
///
/// Paths passed to the helpers are relative to `root` and are reported to the
/// trainee exactly as given.
pub struct LabContext<'a> {
    root: &'a Path,
    fs: &'a dyn FileSystem,
    tests: TestRunner<'a>,
    stripper: CommentStripper,
}

impl<'a> LabContext<'a> {
    #[must_use]
    pub fn new(root: &'a Path, fs: &'a dyn FileSystem, tests: TestRunner<'a>) -> Self {
        Self {
            root,
            fs,
            tests,
            stripper: CommentStripper::default(),
        }
    }

    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    #[must_use]
    pub fn exists(&self, relative: &str) -> bool {
        self.fs.exists(&self.path(relative))
    }

    #[must_use]
    pub fn read(&self, relative: &str) -> FileContent {
        let path = self.path(relative);
        if !self.fs.exists(&path) {
            return FileContent::Missing;
        }
        self.fs
            .read_to_string(&path)
            .map_or(FileContent::Unreadable, FileContent::Text)
    }

    /// Existence gate that reports both outcomes.
    ///
    /// Pushes `File <path> exists` and returns the content, or pushes a single
    /// failure and returns `None` so the caller skips content checks.
    pub fn require(&self, relative: &str, results: &mut Vec<CheckResult>) -> Option<String> {
        let content = self.require_quiet(relative, results)?;
        results.push(CheckResult::passed(format!("File {relative} exists")));
        Some(content)
    }

    /// Existence gate that only reports failure.
    pub fn require_quiet(&self, relative: &str, results: &mut Vec<CheckResult>) -> Option<String> {
        match self.read(relative) {
            FileContent::Text(content) => Some(content),
            FileContent::Missing => {
                results.push(CheckResult::failed(format!("File {relative} not found")));
                None
            }
            FileContent::Unreadable => {
                results.push(CheckResult::failed(format!("Could not read {relative}")));
                None
            }
        }
    }

    #[must_use]
    pub const fn tests(&self) -> &TestRunner<'a> {
        &self.tests
    }

    #[must_use]
    pub const fn stripper(&self) -> &CommentStripper {
        &self.stripper
    }
}
