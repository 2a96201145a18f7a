//! Core extraction engine.
//!
//! Two independent parsers share the [`parsers::Parser`] contract and
//! accumulate discovered keys into a [`collection::TranslationCollection`].
//! Neither parser depends on the other; the extraction pipeline in
//! `crate::extraction` fans them out across a file set and merges results.

pub mod collection;
pub mod parsers;

pub use collection::TranslationCollection;
pub use parsers::{Parser, PatternParser, TagParser};
