//! Template node tree.
//!
//! The structural nodes produced by [`super::parser::parse_template`]. The
//! tree is immutable and finite; extraction walks it read-only.

use serde::Serialize;

use super::expr::Ast;

/// A single template node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Node {
    Element(Element),
    Text(Text),
    /// Text containing `{{ interpolation }}`. Kept distinct from [`Text`]
    /// so literal-text consumers never see dynamic content.
    BoundText(BoundText),
    Comment(Comment),
}

/// An element or component instance: `<tag attr="v" [input]="expr">...</tag>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub name: String,
    /// Plain (static text) attributes.
    pub attributes: Vec<TextAttribute>,
    /// Bound (expression) attributes.
    pub inputs: Vec<BoundAttribute>,
    pub children: Vec<Node>,
}

impl Element {
    /// Plain attribute by name, if present.
    pub fn attribute(&self, name: &str) -> Option<&TextAttribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Bound attribute by name, if present.
    pub fn input(&self, name: &str) -> Option<&BoundAttribute> {
        self.inputs.iter().find(|input| input.name == name)
    }

    /// Direct children that are literal text nodes.
    pub fn text_children(&self) -> impl Iterator<Item = &Text> {
        self.children.iter().filter_map(|child| match child {
            Node::Text(text) => Some(text),
            _ => None,
        })
    }
}

/// Literal text between tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub value: String,
}

/// Text with embedded interpolation, parsed into an
/// [`super::expr::Interpolation`] expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundText {
    pub value: Ast,
}

/// `<!-- ... -->`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub value: String,
}

/// A plain attribute: `name="value"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAttribute {
    pub name: String,
    pub value: String,
}

/// A bound attribute: `[name]="expr"`, or `name="{{ expr }}"` promoted to a
/// binding. The value is always an [`Ast::WithSource`] wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundAttribute {
    pub name: String,
    pub value: Ast,
}
