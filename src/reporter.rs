//! Report formatting and printing utilities.
//!
//! Kept separate from the extraction engine so the library stays free of
//! printing side effects. Summaries go to stderr; stdout is reserved for
//! the key inventory itself.

use colored::Colorize;

use crate::extraction::ExtractionOutcome;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a run summary: keys found, files scanned, and any per-file
/// extraction failures.
pub fn print_summary(outcome: &ExtractionOutcome, verbose: bool) {
    for failure in &outcome.failures {
        eprintln!(
            "{} {}: {}",
            FAILURE_MARK.red(),
            failure.file_path.bold(),
            failure.message.red()
        );
    }

    if verbose {
        for key in outcome.collection.keys() {
            eprintln!("  {}", key.dimmed());
        }
    }

    let mark = if outcome.failures.is_empty() {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };
    eprintln!(
        "{} {} keys extracted from {} files ({} failed)",
        mark,
        outcome.collection.len().to_string().bold(),
        outcome.files_scanned,
        outcome.failures.len()
    );
}
