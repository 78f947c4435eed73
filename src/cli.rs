use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{LabVerifyError, Result};
use crate::labs::{self, Lab};
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lab-verify")]
#[command(version, about = "Verify completion of the Thread Engineering labs")]
#[command(long_about = "Inspects lab files and runs their tests to grade each lab.\n\n\
    Exit codes:\n  \
    0 - Every check of the selected lab(s) passed\n  \
    1 - A check failed, or the invocation was invalid")]
pub struct Cli {
    /// Lab to verify: 1-6, or `all` for every lab
    pub lab: Option<String>,

    /// Lab repository root that paths and commands are resolved against
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Print diagnostic notes (config source, commands run) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which labs a run covers.
#[derive(Debug, Clone, Copy)]
pub enum LabSelection {
    One(&'static Lab),
    All,
}

impl LabSelection {
    /// Resolve the positional lab argument.
    ///
    /// # Errors
    /// Returns `UnknownLab` if `arg` names neither a lab nor `all`.
    pub fn parse(arg: &str) -> Result<Self> {
        if arg == "all" {
            return Ok(Self::All);
        }
        labs::find(arg)
            .map(Self::One)
            .ok_or_else(|| LabVerifyError::UnknownLab(arg.to_string()))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
