//! Lab 4: architecture decision record with filled-in sections.

use crate::checker::{CheckResult, SectionRequirement};

use super::LabContext;

pub const NAME: &str = "Fusion Thread - Architecture Decision";

const DOCUMENT: &str = "docs/architecture-decision.md";

const SECTIONS: [SectionRequirement; 3] = [
    SectionRequirement::new("Decision", 50, &["[Use Lab 4", "[Your"]),
    SectionRequirement::new("Rationale", 50, &["[Document", "[Your"]),
    SectionRequirement::new("Consequences", 30, &["[What are", "[Your"]),
];

pub fn check(ctx: &LabContext<'_>) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let Some(content) = ctx.require(DOCUMENT, &mut results) else {
        return results;
    };

    results.extend(SECTIONS.iter().map(|section| section.check(&content)));
    results
}

#[cfg(test)]
#[path = "architecture_decision_tests.rs"]
mod tests;
