//! Lab 6: JSDoc on every exported utility function, with lint still passing.

use crate::checker::{CheckResult, ExportDocCounter};

use super::LabContext;

pub const NAME: &str = "Long Thread - JSDoc Documentation";

const UTIL_FILES: [&str; 3] = [
    "src/utils/validators.ts",
    "src/utils/formatters.ts",
    "src/utils/parsers.ts",
];

pub fn check(ctx: &LabContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let counter = ExportDocCounter::new();

    for path in UTIL_FILES {
        let Some(content) = ctx.require_quiet(path, &mut results) else {
            continue;
        };
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let coverage = counter.count(&content);

        results.push(if coverage.is_complete() {
            CheckResult::passed(format!(
                "{file_name}: All {} functions have JSDoc",
                coverage.exported
            ))
        } else {
            CheckResult::failed(format!(
                "{file_name}: {}/{} functions have JSDoc",
                coverage.documented, coverage.exported
            ))
        });
    }

    results.push(
        ctx.tests()
            .run_lint("Lint passes", "Lint fails - check for issues"),
    );
    results
}

#[cfg(test)]
#[path = "jsdoc_tests.rs"]
mod tests;
