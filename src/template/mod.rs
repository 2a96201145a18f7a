//! Angular-style template parsing.
//!
//! This module turns raw template markup into a tree of [`ast::Node`] values
//! and binding expressions into [`expr::Ast`] values. Only the subset of the
//! template grammar that key extraction can reach is implemented: elements
//! with plain and bound attributes, text, comments, interpolation, and the
//! expression forms that can statically contain literal primitives.

pub mod ast;
pub mod error;
pub mod expr;
pub mod expr_parser;
pub mod lexer;
pub mod parser;

pub use ast::{BoundAttribute, Element, Node, Text, TextAttribute};
pub use error::ParseError;
pub use expr::{Ast, AstWithSource, LiteralPrimitive};
pub use parser::parse_template;
