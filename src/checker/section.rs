use crate::extract::extract_section;

use super::CheckResult;
use super::pattern::contains_any;

/// Content requirement for a `## <heading>` markdown section.
///
/// The section passes when its trimmed body is at least `min_len` characters long
/// and contains none of the placeholder markers left by the lab template.
#[derive(Debug, Clone)]
pub struct SectionRequirement {
    pub heading: &'static str,
    pub min_len: usize,
    pub placeholders: &'static [&'static str],
}

impl SectionRequirement {
    #[must_use]
    pub const fn new(
        heading: &'static str,
        min_len: usize,
        placeholders: &'static [&'static str],
    ) -> Self {
        Self {
            heading,
            min_len,
            placeholders,
        }
    }

    /// Returns true if `body` satisfies the length and placeholder constraints.
    #[must_use]
    pub fn is_satisfied_by(&self, body: &str) -> bool {
        body.chars().count() >= self.min_len && !contains_any(body, self.placeholders)
    }

    #[must_use]
    pub fn check(&self, document: &str) -> CheckResult {
        let body = extract_section(document, self.heading);
        CheckResult::from_condition(
            self.is_satisfied_by(body),
            format!("{} section has content", self.heading),
            format!(
                "{} section is empty or contains placeholder text",
                self.heading
            ),
        )
    }
}
