//! Lab 3: token expiration in `authMiddleware`, followed by a rejection test.

use crate::checker::{CheckResult, PatternSet};
use crate::extract::extract_function;

use super::{FileContent, LabContext};

pub const NAME: &str = "Chained Thread - Token Expiration";

const SOURCE: &str = "src/middleware/auth.ts";
const TESTS: &str = "tests/middleware/auth.test.ts";
const MIDDLEWARE: &str = "authMiddleware";

/// Expiration handling inside the middleware body: a helper call, an inline
/// comparison against `Date.now()`, or an early "expired" response.
fn middleware_expiration() -> PatternSet {
    PatternSet::new()
        .regex(r"isTokenExpired\s*\(")
        .regex(r"isExpired\s*\(")
        .regex(r"checkExpiration\s*\(")
        .regex(r"decoded\.exp\s*[<>]=?\s*Date\.now\(\)")
        .regex(r"decoded\.exp\s*\*\s*1000\s*[<>]=?\s*Date\.now\(\)")
        .regex(r"Date\.now\(\)\s*[<>]=?\s*decoded\.exp")
        .regex(r"(?i)return\s+c\.json\s*\(\s*\{[^}]*expired")
}

/// An expiration helper defined anywhere in the file.
fn expiration_helper() -> PatternSet {
    PatternSet::new()
        .regex(r"function\s+(isTokenExpired|isExpired|checkExpiration)\s*\(")
        .regex(r"const\s+(isTokenExpired|isExpired|checkExpiration)\s*=\s*\(")
}

/// An active `it(...)` registration whose title covers rejecting expired tokens.
fn expiration_rejection_test() -> PatternSet {
    PatternSet::new()
        .regex(r#"(?im)^\s*it\s*\(\s*["'].*reject.*expir"#)
        .regex(r#"(?im)^\s*it\s*\(\s*["'].*expir.*reject"#)
        .regex(r#"(?im)^\s*it\s*\(\s*["']should reject expired"#)
        .regex(r#"(?im)^\s*it\s*\(\s*["']expired token.*401"#)
}

pub fn check(ctx: &LabContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let Some(content) = ctx.require(SOURCE, &mut results) else {
        return results;
    };

    let body = extract_function(&content, MIDDLEWARE);
    let stripper = ctx.stripper();
    let implemented = middleware_expiration().is_match_in_code(body, stripper)
        || expiration_helper().is_match_in_code(&content, stripper);
    results.push(CheckResult::from_condition(
        implemented,
        "Token expiration check implemented",
        format!("No token expiration check found in {MIDDLEWARE}"),
    ));

    match ctx.read(TESTS) {
        FileContent::Text(tests) => results.push(CheckResult::from_condition(
            expiration_rejection_test().is_match_in_code(&tests, stripper),
            "Auth tests include expiration rejection test",
            "Auth tests missing expiration rejection test",
        )),
        FileContent::Unreadable => {
            results.push(CheckResult::failed(format!("Could not read {TESTS}")));
        }
        // The test run below reports a missing test file.
        FileContent::Missing => {}
    }

    results.push(ctx.tests().run_tests(
        TESTS,
        "Auth middleware tests pass",
        "Auth middleware tests fail",
    ));

    results
}

#[cfg(test)]
#[path = "token_expiration_tests.rs"]
mod tests;
