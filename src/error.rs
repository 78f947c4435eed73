use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabVerifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Unknown lab: {0}")]
    UnknownLab(String),
}

impl LabVerifyError {
    /// Short category label used as the error heading on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::UnknownLab(_) => "UnknownLab",
        }
    }

    /// Actionable hint shown under the error, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check .lab-verify.toml, or pass --no-config to use the defaults")
            }
            Self::FileAccess { .. } => Some("Check that the path exists and is readable"),
            Self::UnknownLab(_) => Some("Pass a lab number or `all`"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabVerifyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
