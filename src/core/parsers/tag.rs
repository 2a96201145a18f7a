//! Template-tag key extraction.
//!
//! Walks a parsed template node tree, finds `<translate>` and
//! `<public-translate>` elements, and pulls keys out of their `key`
//! attribute (plain or bound) or literal child text.

use std::borrow::Cow;

use anyhow::Result;

use super::Parser;
use crate::core::collection::TranslationCollection;
use crate::template::{self, Ast, Element, LiteralPrimitive, Node};
use crate::utils::{extract_inline_template, is_component_file};

const TRANSLATE_TAG_NAME: &str = "translate";
const PUBLIC_TRANSLATE_TAG_NAME: &str = "public-translate";
const TRANSLATE_ATTR_KEY: &str = "key";

/// Extracts keys from translation-marked template elements.
pub struct TagParser;

impl Parser for TagParser {
    fn extract(&self, source: &str, file_path: &str) -> Result<Option<TranslationCollection>> {
        let template_source: Cow<'_, str> = if is_component_file(file_path) {
            Cow::Owned(extract_inline_template(source))
        } else {
            Cow::Borrowed(source)
        };

        let nodes = template::parse_template(&template_source, file_path)?;

        let mut collection = TranslationCollection::new();
        for element in elements_with_translate_tag(&nodes) {
            // Priority order: plain attribute, bound attribute, child text.
            // First match wins; the rules never combine for one element.
            if let Some(attribute) = element.attribute(TRANSLATE_ATTR_KEY)
                && !attribute.value.is_empty()
            {
                collection = collection.add_key(&attribute.value);
                continue;
            }

            if let Some(input) = element.input(TRANSLATE_ATTR_KEY) {
                for literal in literal_primitives(&input.value) {
                    collection = collection.add_key(&literal.value_text());
                }
                continue;
            }

            for text in element.text_children() {
                let key = text.value.trim();
                if !key.is_empty() {
                    collection = collection.add_key(key);
                }
            }
        }
        Ok(Some(collection))
    }
}

/// Collect every translation-tagged element, depth-first pre-order with
/// sibling order preserved. Recursion descends into the children of every
/// element whether or not the element itself matched.
fn elements_with_translate_tag<'a>(nodes: &'a [Node]) -> Vec<&'a Element> {
    let mut elements = Vec::new();
    for node in nodes {
        if let Node::Element(element) = node {
            if element.name == TRANSLATE_TAG_NAME || element.name == PUBLIC_TRANSLATE_TAG_NAME {
                elements.push(element);
            }
            elements.extend(elements_with_translate_tag(&element.children));
        }
    }
    elements
}

/// Resolve an expression to the literal primitives it can statically yield,
/// in traversal order.
///
/// Container variants are recursed into; map keys are never inspected, only
/// values. Every other variant (property reads, calls, unary operations and
/// the like) cannot produce a compile-time key and resolves to nothing.
fn literal_primitives(exp: &Ast) -> Vec<&LiteralPrimitive> {
    if let Ast::LiteralPrimitive(literal) = exp {
        return vec![literal];
    }

    let visit: Vec<&Ast> = match exp {
        Ast::Interpolation(interpolation) => interpolation.expressions.iter().collect(),
        Ast::LiteralArray(array) => array.expressions.iter().collect(),
        Ast::LiteralMap(map) => map.values.iter().collect(),
        Ast::BindingPipe(pipe) => vec![pipe.exp.as_ref()],
        Ast::Conditional(conditional) => {
            vec![conditional.true_exp.as_ref(), conditional.false_exp.as_ref()]
        }
        Ast::Binary(binary) => vec![binary.left.as_ref(), binary.right.as_ref()],
        Ast::WithSource(with_source) => vec![with_source.ast.as_ref()],
        _ => Vec::new(),
    };

    visit.into_iter().flat_map(literal_primitives).collect()
}
