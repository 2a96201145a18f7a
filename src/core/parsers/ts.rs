use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A validated TypeScript/JavaScript source.
///
/// Only `text` is consumed by the pattern parser; the parsed module is kept
/// so other extractors under the same contract can query it.
pub struct ParsedSource {
    pub module: Module,
    pub text: String,
    pub source_map: Arc<SourceMap>,
}

/// Parse TypeScript/JavaScript source and hand back its text surface.
///
/// Fails on malformed input; that failure is the caller's to surface. The
/// parse happens under its own `GLOBALS` scope so concurrent independent
/// invocations are safe.
pub fn parse_ts_source(code: String, file_path: &str) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse ts string: {:?}", e))?;

        Ok(ParsedSource {
            module,
            text: source_file.src.to_string(),
            source_map,
        })
    })
}
