//! Lab 5: decomposing the notification preferences feature into threads.

use crate::checker::{CheckResult, SectionRequirement, count_enumerated_items};

use super::LabContext;

pub const NAME: &str = "Meta Thread - Feature Decomposition";

const DOCUMENT: &str = "docs/feature-notification-preferences.md";

const THREAD_MAP: SectionRequirement =
    SectionRequirement::new("Thread Map", 100, &["[Your decomposition"]);

/// Highest thread number looked for.
const MAX_THREADS: usize = 7;
const MIN_THREADS: usize = 4;

pub fn check(ctx: &LabContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let Some(content) = ctx.require(DOCUMENT, &mut results) else {
        return results;
    };

    results.push(THREAD_MAP.check(&content));

    let threads = count_enumerated_items(&content, "Thread", MAX_THREADS);
    results.push(CheckResult::from_condition(
        threads >= MIN_THREADS,
        format!("{threads} threads identified in decomposition"),
        format!("Only {threads} threads identified (need at least {MIN_THREADS})"),
    ));

    results
}

#[cfg(test)]
#[path = "feature_decomposition_tests.rs"]
mod tests;
