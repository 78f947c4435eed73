//! Lab check registry.
//!
//! Each lab is a fixed, ordered sequence of checks. The registry is a static table
//! in lab-id order; it is never mutated.

mod architecture_decision;
mod context;
mod feature_decomposition;
mod jsdoc;
mod null_check;
mod token_expiration;

pub use context::{FileContent, LabContext};

use crate::checker::CheckResult;

type LabCheck = fn(&LabContext<'_>) -> Vec<CheckResult>;

/// A gradable lab: identifier, display name and its checks.
#[derive(Clone, Copy)]
pub struct Lab {
    pub id: &'static str,
    pub name: &'static str,
    check: LabCheck,
}

impl Lab {
    /// Run every check of this lab in order.
    #[must_use]
    pub fn run(&self, ctx: &LabContext<'_>) -> Vec<CheckResult> {
        (self.check)(ctx)
    }
}

impl std::fmt::Debug for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lab")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static REGISTRY: [Lab; 6] = [
    Lab {
        id: "1",
        name: null_check::NAME,
        check: null_check::check,
    },
    Lab {
        id: "2",
        name: docs_and_tests::NAME,
        check: docs_and_tests::check,
    },
    Lab {
        id: "3",
        name: token_expiration::NAME,
        check: token_expiration::check,
    },
    Lab {
        id: "4",
        name: architecture_decision::NAME,
        check: architecture_decision::check,
    },
    Lab {
        id: "5",
        name: feature_decomposition::NAME,
        check: feature_decomposition::check,
    },
    Lab {
        id: "6",
        name: jsdoc::NAME,
        check: jsdoc::check,
    },
];

/// All labs in identifier order.
#[must_use]
pub fn registry() -> &'static [Lab] {
    &REGISTRY
}

/// Look up a lab by its identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Lab> {
    REGISTRY.iter().find(|lab| lab.id == id)
}

/// Comma-separated list of accepted arguments, e.g. `1, 2, 3, 4, 5, 6, all`.
#[must_use]
pub fn valid_options() -> String {
    let mut options: Vec<&str> = REGISTRY.iter().map(|lab| lab.id).collect();
    options.push("all");
    options.join(", ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
