//! Lab verification and report aggregation.

use std::path::Path;

use indexmap::IndexMap;

use crate::checker::{CheckResult, all_passed};
use crate::config::{FileSystem, RunnerConfig};
use crate::labs::{self, Lab, LabContext};
use crate::runner::{CommandRunner, TestRunner};

/// Ordered check results of one lab run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabReport {
    pub id: &'static str,
    pub name: &'static str,
    pub results: Vec<CheckResult>,
}

impl LabReport {
    /// True iff the lab produced at least one result and every result passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        all_passed(&self.results)
    }
}

/// Pass/fail per lab for a full run, in lab-id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    outcomes: IndexMap<&'static str, bool>,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[LabReport]) -> Self {
        Self {
            outcomes: reports
                .iter()
                .map(|report| (report.id, report.passed()))
                .collect(),
        }
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.outcomes.iter().map(|(id, passed)| (*id, *passed))
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.values().filter(|passed| **passed).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True iff at least one lab ran and all of them passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.total() > 0 && self.passed_count() == self.total()
    }
}

/// Runs lab checks against a lab root through injected collaborators.
///
/// Holds no state between runs: verifying the same lab twice against an unchanged
/// tree yields identical reports.
pub struct Verifier<'a> {
    root: &'a Path,
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    config: &'a RunnerConfig,
}

impl<'a> Verifier<'a> {
    #[must_use]
    pub const fn new(
        root: &'a Path,
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
        config: &'a RunnerConfig,
    ) -> Self {
        Self {
            root,
            fs,
            runner,
            config,
        }
    }

    #[must_use]
    pub fn verify(&self, lab: &Lab) -> LabReport {
        let ctx = LabContext::new(
            self.root,
            self.fs,
            TestRunner::new(self.runner, self.config),
        );
        LabReport {
            id: lab.id,
            name: lab.name,
            results: lab.run(&ctx),
        }
    }

    /// Verify every lab in order, handing each report to `on_report` as soon as
    /// it is complete. A failing lab never stops the run.
    pub fn verify_each(&self, mut on_report: impl FnMut(&LabReport)) -> Vec<LabReport> {
        labs::registry()
            .iter()
            .map(|lab| {
                let report = self.verify(lab);
                on_report(&report);
                report
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
