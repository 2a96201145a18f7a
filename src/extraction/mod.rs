//! Project-level extraction pipeline.
//!
//! Collects candidate files, fans both parsers out across them in parallel,
//! and merges per-file collections into one ordered result. Per-file parse
//! failures are captured here and reported, never silently dropped; the
//! parsers themselves propagate them untouched.

pub mod pipeline;

pub use pipeline::{ExtractionOutcome, FileFailure, collect_files, run_pipeline};
