//! Diagnostics on stderr.
//!
//! ```text
//! ✖ Config: Configuration error: runner.timeout_secs must be greater than 0
//!   × detail from the underlying error
//!   help: Check .lab-verify.toml, or pass --no-config to use the defaults
//! ⚠ Warning: Lab root ./missing is not a directory
//! · running `bun test tests/routes/users.test.ts` in .
//! ```
//!
//! None of this is part of the lab report, which goes to stdout.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

const ERROR_STYLE: [&str; 2] = [ansi::BOLD, ansi::RED];
const WARNING_STYLE: [&str; 2] = [ansi::BOLD, ansi::YELLOW];

#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        };
        Self { use_colors }
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_error(
            &mut std::io::stderr().lock(),
            error_type,
            message,
            detail,
            suggestion,
        );
    }

    pub fn print_warning(&self, message: &str) {
        self.write_warning(&mut std::io::stderr().lock(), message);
    }

    /// Diagnostic note, used for `-v` output.
    pub fn print_note(&self, message: &str) {
        self.write_note(&mut std::io::stderr().lock(), message);
    }

    // A failing stderr has nowhere left to be reported, so write errors are dropped.

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = self.paint(&format!("✖ {error_type}:"), &ERROR_STYLE);
        let _ = writeln!(w, "{heading} {message}");
        if let Some(detail) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {detail}"), &[ansi::DIM]));
        }
        if let Some(suggestion) = suggestion {
            let _ = writeln!(w, "  {} {suggestion}", self.paint("help:", &[ansi::CYAN]));
        }
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        let heading = self.paint("⚠ Warning:", &WARNING_STYLE);
        let _ = writeln!(w, "{heading} {message}");
    }

    pub fn write_note<W: Write>(&self, w: &mut W, message: &str) {
        let _ = writeln!(w, "{}", self.paint(&format!("· {message}"), &[ansi::DIM]));
    }

    fn paint(&self, text: &str, styles: &[&str]) -> String {
        if self.use_colors {
            format!("{}{text}{}", styles.concat(), ansi::RESET)
        } else {
            text.to_string()
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
