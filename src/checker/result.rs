/// Outcome of a single check: whether it passed and the line shown to the trainee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Pick the passing or failing message depending on `condition`.
    #[must_use]
    pub fn from_condition(
        condition: bool,
        pass_message: impl Into<String>,
        fail_message: impl Into<String>,
    ) -> Self {
        if condition {
            Self::passed(pass_message)
        } else {
            Self::failed(fail_message)
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }
}

/// True iff `results` is non-empty and every result passed.
#[must_use]
pub fn all_passed(results: &[CheckResult]) -> bool {
    !results.is_empty() && results.iter().all(CheckResult::is_passed)
}
