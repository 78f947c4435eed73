//! Line-prefix comment stripping.
//!
//! Pattern checks run on stripped text so that a requirement written only inside a
//! comment does not count as implemented.
//!
//! Only whole-line comments are removed. Block comments (`/* ... */`) and trailing
//! comments after code on the same line are left in place.

pub struct CommentStripper {
    prefixes: Vec<String>,
}

impl Default for CommentStripper {
    fn default() -> Self {
        Self::new(&["//"])
    }
}

impl CommentStripper {
    #[must_use]
    pub fn new(prefixes: &[&str]) -> Self {
        Self {
            prefixes: prefixes.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Returns true if the line, ignoring leading whitespace, starts with a comment prefix.
    #[must_use]
    pub fn is_comment_line(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// Remove every comment line from `text`.
    ///
    /// Comment lines are dropped from the output rather than blanked, so the
    /// remaining lines are joined directly.
    #[must_use]
    pub fn strip(&self, text: &str) -> String {
        text.split('\n')
            .filter(|line| !self.is_comment_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
