use std::fmt::Write;

use crate::report::{LabReport, Summary};

use super::{ColorMode, ansi};

const BANNER_WIDTH: usize = 55;

/// Renders lab reports as colored terminal text.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn line(&self, output: &mut String, text: &str, color: &str) {
        let _ = writeln!(output, "{}", self.colorize(text, color));
    }

    fn banner(&self, output: &mut String, title: &str) {
        let rule = "═".repeat(BANNER_WIDTH);
        self.line(output, &rule, ansi::YELLOW);
        self.line(output, &format!("  {title}"), ansi::YELLOW);
        self.line(output, &rule, ansi::YELLOW);
    }

    /// Banner, one line per check, and the lab's PASS/FAIL line.
    #[must_use]
    pub fn format_lab(&self, report: &LabReport) -> String {
        let mut output = String::from("\n");
        self.banner(
            &mut output,
            &format!("Lab {}: {}", report.id, report.name),
        );
        output.push('\n');

        for result in &report.results {
            if result.passed {
                self.line(&mut output, &format!("  ✅ {}", result.message), ansi::GREEN);
            } else {
                self.line(&mut output, &format!("  ❌ {}", result.message), ansi::RED);
            }
        }

        output.push('\n');
        if report.passed() {
            self.line(&mut output, "  Result: PASS ✨", ansi::GREEN);
        } else {
            self.line(&mut output, "  Result: FAIL", ansi::RED);
        }
        output
    }

    /// Heading printed once before all labs in full-verification mode.
    #[must_use]
    pub fn format_all_header(&self) -> String {
        let mut output = String::new();
        self.line(
            &mut output,
            "\n🧵 Thread Engineering Labs - Full Verification\n",
            ansi::YELLOW,
        );
        output
    }

    /// Per-lab PASS/FAIL list and the `Total: n/m labs passed` tally.
    #[must_use]
    pub fn format_summary(&self, summary: &Summary) -> String {
        let mut output = String::from("\n");
        self.banner(&mut output, "Summary");
        output.push('\n');

        for (id, passed) in summary.outcomes() {
            if passed {
                self.line(&mut output, &format!("  Lab {id}: ✅ PASS"), ansi::GREEN);
            } else {
                self.line(&mut output, &format!("  Lab {id}: ❌ FAIL"), ansi::RED);
            }
        }

        output.push('\n');
        let total_color = if summary.all_passed() {
            ansi::GREEN
        } else {
            ansi::YELLOW
        };
        self.line(
            &mut output,
            &format!(
                "  Total: {}/{} labs passed",
                summary.passed_count(),
                summary.total()
            ),
            total_color,
        );
        output.push('\n');
        output
    }

    /// Usage text shown when no lab argument is given.
    #[must_use]
    pub fn format_usage(&self, program: &str) -> String {
        let mut output = String::new();
        self.line(
            &mut output,
            &format!("\nUsage: {program} <lab-number|all>"),
            ansi::YELLOW,
        );
        let _ = writeln!(output, "\nExamples:");
        let _ = writeln!(output, "  {program} 1      # Verify Lab 1");
        let _ = writeln!(output, "  {program} 2      # Verify Lab 2");
        let _ = writeln!(output, "  {program} all    # Verify all labs");
        output.push('\n');
        output
    }

    /// Error line and accepted values for an unrecognized lab argument.
    #[must_use]
    pub fn format_unknown_lab(&self, lab: &str, valid_options: &str) -> String {
        let mut output = String::new();
        self.line(&mut output, &format!("Unknown lab: {lab}"), ansi::RED);
        let _ = writeln!(output, "Valid options: {valid_options}");
        output
    }

    /// Creates a formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
