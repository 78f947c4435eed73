pub mod checker;
pub mod cli;
pub mod comment;
pub mod config;
pub mod error;
pub mod extract;
pub mod labs;
pub mod output;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use error::{LabVerifyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a run whose overall result is `passed`.
#[must_use]
pub const fn exit_code(passed: bool) -> i32 {
    if passed { EXIT_SUCCESS } else { EXIT_FAILURE }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
