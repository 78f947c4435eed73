use regex::Regex;

use crate::comment::CommentStripper;

/// A single acceptable phrasing of a requirement.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring match.
    Literal(String),
    /// Regular expression match.
    Regex(Regex),
}

impl Pattern {
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Literal(needle) => text.contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }
}

/// A requirement that is met when ANY of its alternatives matches.
///
/// Alternatives are checked in insertion order; the set is empty-safe and an empty
/// set never matches.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    alternatives: Vec<Pattern>,
}

impl PatternSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn literal(mut self, needle: &str) -> Self {
        self.alternatives.push(Pattern::Literal(needle.to_string()));
        self
    }

    /// Add a regex alternative.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regular expression. Patterns are
    /// compile-time constants of the check catalog.
    #[must_use]
    pub fn regex(mut self, pattern: &str) -> Self {
        self.alternatives
            .push(Pattern::Regex(Regex::new(pattern).expect("Invalid regex")));
        self
    }

    /// True if any alternative matches `text` as-is.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.alternatives.iter().any(|p| p.is_match(text))
    }

    /// True if any alternative matches `text` after comment lines are removed.
    #[must_use]
    pub fn is_match_in_code(&self, text: &str, stripper: &CommentStripper) -> bool {
        self.is_match(&stripper.strip(text))
    }
}

/// True if `text` contains any of the given substrings.
#[must_use]
pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}
