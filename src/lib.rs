//! ngkeys - translation key extraction for Angular-style projects
//!
//! ngkeys is a CLI tool and library that discovers translation keys in two
//! source representations: template markup carrying `<translate>` /
//! `<public-translate>` elements, and TypeScript/JavaScript sources
//! containing literal `dfa.…|…` key strings. The discovered keys feed a
//! downstream translation-catalog builder.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, exit codes)
//! - `config`: Configuration file loading and file matching
//! - `core`: Extraction engine (key collection and the two parsers)
//! - `extraction`: Project pipeline (file walking, parallel fan-out, merge)
//! - `reporter`: Terminal summary output
//! - `template`: Template markup and binding expression parsing
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod extraction;
pub mod reporter;
pub mod template;
pub mod utils;
