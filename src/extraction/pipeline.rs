use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::{Config, FileMatcher};
use crate::core::{Parser, PatternParser, TagParser, TranslationCollection};

/// Result of running extraction over a file set.
#[derive(Debug)]
pub struct ExtractionOutcome {
    /// Union of every file's keys, in file-walk order.
    pub collection: TranslationCollection,
    pub files_scanned: usize,
    /// Files whose extraction failed (malformed markup or source). The
    /// remaining files are unaffected.
    pub failures: Vec<FileFailure>,
}

#[derive(Debug)]
pub struct FileFailure {
    pub file_path: String,
    pub message: String,
}

/// Walk the configured source root and keep files matching the
/// include/ignore globs. Sorted traversal keeps the merged key order
/// deterministic across runs.
pub fn collect_files(project_root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let matcher = FileMatcher::from_config(config)?;
    let source_root = project_root.join(&config.source_root);

    let mut files = Vec::new();
    for entry in WalkDir::new(&source_root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk source root: {}", source_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let relative = path.strip_prefix(project_root).unwrap_or(&path);
        if matcher.matches(relative) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Run both parsers over the file set in parallel and merge the results.
///
/// Each parser call owns its collection and reads only its own input, so
/// the fan-out needs no synchronization; merging happens sequentially in
/// input order afterwards.
pub fn run_pipeline(files: &[PathBuf], project_root: &Path) -> ExtractionOutcome {
    let results: Vec<(String, Result<TranslationCollection>)> = files
        .par_iter()
        .map(|path| {
            let display = path
                .strip_prefix(project_root)
                .unwrap_or(path)
                .display()
                .to_string();
            (display, extract_file(path))
        })
        .collect();

    let mut collection = TranslationCollection::new();
    let mut failures = Vec::new();
    for (file_path, result) in results {
        match result {
            Ok(file_collection) => collection = collection.merge(file_collection),
            Err(err) => failures.push(FileFailure {
                file_path,
                message: format!("{err:#}"),
            }),
        }
    }

    ExtractionOutcome {
        collection,
        files_scanned: files.len(),
        failures,
    }
}

/// Route one file to the parsers its extension calls for. Any parser error
/// fails the whole file.
fn extract_file(path: &Path) -> Result<TranslationCollection> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file_path = path.to_string_lossy();

    let mut collection = TranslationCollection::new();
    match extension(path) {
        Some("html") | Some("htm") => {
            if let Some(keys) = TagParser.extract(&source, &file_path)? {
                collection = collection.merge(keys);
            }
        }
        Some("ts") | Some("js") => {
            // Component files can carry an inline template and key strings
            // in the same source, so both parsers contribute.
            if let Some(keys) = TagParser.extract(&source, &file_path)? {
                collection = collection.merge(keys);
            }
            if let Some(keys) = PatternParser.extract(&source, &file_path)? {
                collection = collection.merge(keys);
            }
        }
        _ => {}
    }
    Ok(collection)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn pipeline_merges_template_and_source_keys() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "src/app/banner.component.html",
            r#"<translate key="dfa.banner.title"></translate>"#,
        );
        write(
            root,
            "src/app/banner.component.ts",
            "export const fallback = 'dfa.banner.fallback|Banner';",
        );

        let config = Config::default();
        let files = collect_files(root, &config).unwrap();
        assert_eq!(files.len(), 2);

        let outcome = run_pipeline(&files, root);
        assert!(outcome.failures.is_empty());
        assert!(outcome.collection.contains("dfa.banner.title"));
        assert!(outcome.collection.contains("dfa.banner.fallback|Banner"));
    }

    #[test]
    fn bad_file_fails_alone() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/bad.html", "<translate>");
        write(root, "src/good.html", "<translate>Good Key</translate>");

        let config = Config::default();
        let files = collect_files(root, &config).unwrap();
        let outcome = run_pipeline(&files, root);

        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].file_path.ends_with("bad.html"));
        assert!(outcome.collection.contains("Good Key"));
    }

    #[test]
    fn ignored_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "src/app/home.spec.ts",
            "const t = 'dfa.test.only|Nope';",
        );

        let config = Config::default();
        let files = collect_files(root, &config).unwrap();
        assert!(files.is_empty());
    }
}
