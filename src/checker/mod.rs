//! Pattern checker catalog: the reusable predicates the lab checks are built from.

mod count;
mod pattern;
mod result;
mod section;

pub use count::{ExportCoverage, ExportDocCounter, count_enumerated_items};
pub use pattern::{Pattern, PatternSet, contains_any};
pub use result::{CheckResult, all_passed};
pub use section::SectionRequirement;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
