//! Lab 1: the `getUserPreferences` null check bug.

use crate::checker::{CheckResult, PatternSet};
use crate::extract::extract_function;

use super::LabContext;

pub const NAME: &str = "Base Thread - Null Check Bug";

const SOURCE: &str = "src/routes/users.ts";
const TESTS: &str = "tests/routes/users.test.ts";
const FUNCTION: &str = "getUserPreferences";

/// Guards accepted in place of the buggy non-null assertions (`user!`).
fn null_guard() -> PatternSet {
    PatternSet::new()
        .regex(r"if\s*\(\s*!user\s*\)")
        .literal("user === undefined")
        .literal("user === null")
        .regex(r"user\?\.\s*preferences")
        .regex(r"if\s*\(\s*!user\.preferences\s*\)")
        .literal("user.preferences === undefined")
        .regex(r"user\.preferences\?\.\s*\w+")
        .regex(r"user\?\.\s*preferences\?\.\s*\w+")
        .regex(r"(?s)return\s*\{.*?user\?\.preferences\?\.")
}

pub fn check(ctx: &LabContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let Some(content) = ctx.require(SOURCE, &mut results) else {
        return results;
    };

    let body = extract_function(&content, FUNCTION);
    results.push(CheckResult::from_condition(
        null_guard().is_match_in_code(body, ctx.stripper()),
        format!("Null/undefined checks implemented in {FUNCTION}"),
        format!("{FUNCTION} missing null/undefined checks"),
    ));

    results.push(ctx.tests().run_tests(
        TESTS,
        "User tests pass",
        "User tests fail - bug may not be fixed",
    ));

    results
}

#[cfg(test)]
#[path = "null_check_tests.rs"]
mod tests;
