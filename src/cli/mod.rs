//! Command-line interface layer.

pub mod args;
pub mod run;

use std::process::ExitCode;

pub use args::{Arguments, Command, ExtractCommand};
pub use run::run;

/// Exit status for CLI commands, following common conventions for
/// extraction tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file extracted cleanly.
    Success,
    /// Extraction finished but some files failed to parse.
    Failure,
    /// The command itself failed (bad config, unreadable root, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
