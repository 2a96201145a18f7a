use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ngkeysrc.json";

/// Project configuration, loaded from `.ngkeysrc.json` when present.
/// Every field has a default so a config file is optional; CLI flags
/// override file values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns (relative to the project root) to skip.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Glob patterns for files fed to the extractors.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Directory under the project root to walk.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Where the key inventory is written; stdout when unset.
    #[serde(default)]
    pub output: Option<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/*.spec.ts", "**/*.spec.js", "**/node_modules/**"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_includes() -> Vec<String> {
    ["**/*.html", "**/*.htm", "**/*.ts", "**/*.js"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_source_root() -> String {
    "src".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: default_includes(),
            source_root: default_source_root(),
            output: None,
        }
    }
}

impl Config {
    /// Load the config file from `project_root`, falling back to defaults
    /// when no file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }

    pub fn default_json() -> Result<String> {
        let json = serde_json::to_string_pretty(&Config::default())?;
        Ok(json + "\n")
    }
}

/// Precompiled include/ignore matcher for relative file paths.
pub struct FileMatcher {
    includes: Vec<Pattern>,
    ignores: Vec<Pattern>,
}

impl FileMatcher {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            includes: compile_patterns(&config.includes)?,
            ignores: compile_patterns(&config.ignores)?,
        })
    }

    /// `relative` is matched against include patterns first, then pruned by
    /// ignore patterns.
    pub fn matches(&self, relative: &Path) -> bool {
        self.includes
            .iter()
            .any(|pattern| pattern.matches_path(relative))
            && !self
                .ignores
                .iter()
                .any(|pattern| pattern.matches_path(relative))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|raw| Pattern::new(raw).with_context(|| format!("Invalid glob pattern: {raw}")))
        .collect()
}
