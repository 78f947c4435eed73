use regex::Regex;

/// Count how many of the items `1..=max` a document enumerates.
///
/// Item `i` counts once if the document contains `<label> i`, a `### i.` heading,
/// or a line starting with `i. `. The label check is a plain substring test, so
/// `Thread 1` is also found inside `Thread 12`.
#[must_use]
pub fn count_enumerated_items(content: &str, label: &str, max: usize) -> usize {
    (1..=max)
        .filter(|i| {
            content.contains(&format!("{label} {i}"))
                || content.contains(&format!("### {i}."))
                || content
                    .lines()
                    .any(|line| line.starts_with(&format!("{i}. ")))
        })
        .count()
}

/// Exported function count versus how many of them carry a `/** ... */` doc block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCoverage {
    pub exported: usize,
    pub documented: usize,
}

impl ExportCoverage {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.documented >= self.exported
    }
}

/// Counts exported functions and the doc blocks directly above them.
pub struct ExportDocCounter {
    export_pattern: Regex,
    documented_pattern: Regex,
}

impl Default for ExportDocCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportDocCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            export_pattern: Regex::new(r"export function \w+").expect("Invalid regex"),
            documented_pattern: Regex::new(r"(?s)/\*\*.*?\*/\s*\nexport function")
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn count(&self, content: &str) -> ExportCoverage {
        ExportCoverage {
            exported: self.export_pattern.find_iter(content).count(),
            documented: self.documented_pattern.find_iter(content).count(),
        }
    }
}
