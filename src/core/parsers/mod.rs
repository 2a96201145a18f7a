//! Key extraction parsers.
//!
//! - `pattern`: regex scan over TypeScript/JavaScript sources for the
//!   domain key string pattern
//! - `tag`: template node tree walk for `<translate>` elements
//! - `ts`: swc-backed source normalizer used by the pattern parser

pub mod pattern;
pub mod tag;
pub mod ts;

use anyhow::Result;

use super::collection::TranslationCollection;

pub use pattern::PatternParser;
pub use tag::TagParser;

/// Contract shared by every key extractor.
///
/// `Ok(None)` means "this file contributes no input to this parser" and
/// tells callers to skip merging. Both parsers in this crate always return
/// `Ok(Some(_))`, possibly empty, and reserve `None` for other
/// implementations of the contract. Malformed input surfaces as `Err`,
/// unwrapped; parsers perform no recovery of their own.
pub trait Parser {
    fn extract(&self, source: &str, file_path: &str) -> Result<Option<TranslationCollection>>;
}
