//! Regex-based key extraction from TypeScript/JavaScript sources.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::{Parser, ts::parse_ts_source};
use crate::core::collection::TranslationCollection;

/// Quoted domain key string: `'dfa.some.path|Default text'`.
static TRANSLATION_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"](dfa\.[\w\d.]+\|[^+]+?)['"]"#).unwrap());

/// Sentinel payloads that mark a match as non-translatable.
const EXCLUDED_MARKERS: &[&str] = &["|http", "|not-set"];

/// Scans raw source text for literal `dfa.…|…` key strings.
///
/// The source is first run through the TypeScript parser; malformed input
/// propagates from there. The scan itself works on the plain text surface,
/// structural validity of the surroundings is never consulted.
pub struct PatternParser;

impl Parser for PatternParser {
    fn extract(&self, source: &str, file_path: &str) -> Result<Option<TranslationCollection>> {
        let parsed = parse_ts_source(source.to_string(), file_path)?;

        let keys: Vec<&str> = TRANSLATION_STRING_REGEX
            .captures_iter(&parsed.text)
            .map(|capture| capture.get(1).map_or("", |m| m.as_str()))
            .filter(|key| !EXCLUDED_MARKERS.iter().any(|marker| key.contains(marker)))
            .collect();

        Ok(Some(TranslationCollection::new().add_keys(keys)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> TranslationCollection {
        PatternParser
            .extract(source, "test.ts")
            .unwrap()
            .expect("pattern parser always yields a collection")
    }

    #[test]
    fn no_pattern_yields_empty_collection() {
        let collection = extract("const x = 'plain string';");
        assert!(collection.is_empty());
    }

    #[test]
    fn captures_domain_keys() {
        let collection = extract("const title = 'dfa.foo.bar|Hello';");
        assert!(collection.contains("dfa.foo.bar|Hello"));
    }

    #[test]
    fn captures_double_quoted_keys() {
        let collection = extract(r#"const title = "dfa.foo.bar|Hello";"#);
        assert!(collection.contains("dfa.foo.bar|Hello"));
    }

    #[test]
    fn excludes_url_and_not_set_sentinels() {
        let collection = extract(
            "const a = 'dfa.foo|http://example.com';\nconst b = 'dfa.foo|not-set';\nconst c = 'dfa.foo|Real';",
        );
        assert_eq!(collection.keys().collect::<Vec<_>>(), vec!["dfa.foo|Real"]);
    }

    #[test]
    fn deduplicates_repeated_keys() {
        let collection =
            extract("const a = 'dfa.k|One';\nconst b = 'dfa.k|One';\nconst c = 'dfa.other|Two';");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn concatenated_strings_are_not_keys() {
        // A `+` in the payload breaks the pattern.
        let collection = extract("const a = 'dfa.foo|' + suffix;");
        assert!(collection.is_empty());
    }

    #[test]
    fn malformed_source_propagates_error() {
        assert!(PatternParser.extract("const = ;", "bad.ts").is_err());
    }
}
