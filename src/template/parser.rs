//! Markup parser producing the template node tree.
//!
//! A single-pass cursor over the raw text. Structural problems (unclosed
//! elements, mismatched close tags, malformed attributes) are hard errors;
//! there is no recovery, callers handle failures per file.

use super::ast::{BoundAttribute, BoundText, Comment, Element, Node, Text, TextAttribute};
use super::error::ParseError;
use super::expr::{Ast, AstWithSource, Interpolation};
use super::expr_parser::{parse_binding, parse_expression};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parse template markup into a sequence of top-level nodes.
pub fn parse_template(source: &str, path: &str) -> Result<Vec<Node>, ParseError> {
    let mut parser = TemplateParser {
        source,
        path,
        pos: 0,
    };
    let nodes = parser.parse_nodes(None)?;

    // parse_nodes only stops early on a close tag; at top level that tag
    // has no matching open.
    if !parser.at_end() {
        let offset = parser.pos;
        parser.pos += 2;
        let name = parser.read_tag_name();
        return Err(ParseError::StrayCloseTag {
            path: path.to_string(),
            offset,
            name,
        });
    }
    Ok(nodes)
}

struct TemplateParser<'a> {
    source: &'a str,
    path: &'a str,
    pos: usize,
}

impl TemplateParser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn rest(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn read_tag_name(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.') {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        self.source[start..self.pos].to_string()
    }

    /// Parse sibling nodes until end of input or a close tag. `parent` is
    /// the enclosing element's name and open offset, used for unclosed
    /// element reporting.
    fn parse_nodes(&mut self, parent: Option<(&str, usize)>) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            if self.at_end() {
                return match parent {
                    Some((name, offset)) => Err(ParseError::UnclosedElement {
                        path: self.path.to_string(),
                        offset,
                        name: name.to_string(),
                    }),
                    None => Ok(nodes),
                };
            }

            let rest = self.rest();
            if rest.starts_with("</") {
                return Ok(nodes);
            }
            if rest.starts_with("<!--") {
                nodes.push(self.parse_comment()?);
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_markup_declaration();
            } else if rest.starts_with('<') && starts_tag_name(&rest[1..]) {
                nodes.push(self.parse_element()?);
            } else {
                nodes.push(self.parse_text()?);
            }
        }
    }

    fn parse_comment(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        self.pos += "<!--".len();
        match self.rest().find("-->") {
            Some(end) => {
                let value = self.source[self.pos..self.pos + end].to_string();
                self.pos += end + "-->".len();
                Ok(Node::Comment(Comment { value }))
            }
            None => Err(ParseError::UnterminatedComment {
                path: self.path.to_string(),
                offset: start,
            }),
        }
    }

    /// `<!DOCTYPE …>` and similar declarations carry no keys; skip them.
    fn skip_markup_declaration(&mut self) {
        match self.rest().find('>') {
            Some(end) => self.pos += end + 1,
            None => self.pos = self.source.len(),
        }
    }

    fn parse_text(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        loop {
            match self.rest().find('<') {
                None => {
                    self.pos = self.source.len();
                    break;
                }
                Some(lt) => {
                    let after = &self.rest()[lt + 1..];
                    // A `<` that does not open a tag, close tag, or
                    // declaration is literal text.
                    if starts_tag_name(after) || after.starts_with('/') || after.starts_with('!') {
                        self.pos += lt;
                        break;
                    }
                    self.pos += lt + 1;
                }
            }
        }

        let raw = &self.source[start..self.pos];
        if raw.contains("{{") {
            let interpolation = self.parse_interpolation(raw, start)?;
            return Ok(Node::BoundText(BoundText {
                value: Ast::WithSource(AstWithSource::new(
                    Ast::Interpolation(interpolation),
                    raw,
                )),
            }));
        }
        Ok(Node::Text(Text {
            value: decode_entities(raw),
        }))
    }

    fn parse_element(&mut self) -> Result<Node, ParseError> {
        let open_offset = self.pos;
        self.pos += 1;
        let name = self.read_tag_name();

        let mut attributes: Vec<TextAttribute> = Vec::new();
        let mut inputs: Vec<BoundAttribute> = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            if self.eat("/>") {
                self_closing = true;
                break;
            }
            if self.eat(">") {
                break;
            }
            if self.at_end() {
                return Err(ParseError::UnexpectedEof {
                    path: self.path.to_string(),
                    offset: self.pos,
                });
            }

            let (attr_name, value, value_offset) = self.parse_attribute(&name)?;
            if let Some(binding) = attr_name
                .strip_prefix('[')
                .and_then(|inner| inner.strip_suffix(']'))
            {
                inputs.push(BoundAttribute {
                    name: binding.to_string(),
                    value: parse_binding(&value, self.path)?,
                });
            } else if value.contains("{{") {
                // Interpolated plain attribute is promoted to a binding,
                // the way the Angular template parser treats it.
                let interpolation = self.parse_interpolation(&value, value_offset)?;
                inputs.push(BoundAttribute {
                    name: attr_name,
                    value: Ast::WithSource(AstWithSource::new(
                        Ast::Interpolation(interpolation),
                        value,
                    )),
                });
            } else {
                attributes.push(TextAttribute {
                    name: attr_name,
                    value: decode_entities(&value),
                });
            }
        }

        let children = if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            Vec::new()
        } else {
            let children = self.parse_nodes(Some((&name, open_offset)))?;
            self.consume_close_tag(&name)?;
            children
        };

        Ok(Node::Element(Element {
            name,
            attributes,
            inputs,
            children,
        }))
    }

    fn consume_close_tag(&mut self, expected: &str) -> Result<(), ParseError> {
        let offset = self.pos;
        if !self.eat("</") {
            return Err(ParseError::UnclosedElement {
                path: self.path.to_string(),
                offset,
                name: expected.to_string(),
            });
        }
        let found = self.read_tag_name();
        if found != expected {
            return Err(ParseError::MismatchedCloseTag {
                path: self.path.to_string(),
                offset,
                expected: expected.to_string(),
                found,
            });
        }
        self.skip_whitespace();
        if !self.eat(">") {
            return Err(ParseError::UnexpectedEof {
                path: self.path.to_string(),
                offset: self.pos,
            });
        }
        Ok(())
    }

    /// Parse one attribute. Returns (name, raw value, value offset).
    fn parse_attribute(&mut self, element: &str) -> Result<(String, String, usize), ParseError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || matches!(c, '=' | '>' | '/') {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = self.source[start..self.pos].to_string();
        if name.is_empty() {
            return Err(ParseError::MalformedAttribute {
                path: self.path.to_string(),
                offset: start,
                element: element.to_string(),
            });
        }

        self.skip_whitespace();
        if !self.eat("=") {
            return Ok((name, String::new(), self.pos));
        }
        self.skip_whitespace();

        match self.peek_char() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let value_offset = self.pos;
                match self.rest().find(quote) {
                    Some(end) => {
                        let value = self.source[self.pos..self.pos + end].to_string();
                        self.pos += end + 1;
                        Ok((name, value, value_offset))
                    }
                    None => Err(ParseError::UnexpectedEof {
                        path: self.path.to_string(),
                        offset: value_offset,
                    }),
                }
            }
            Some(_) => {
                let value_offset = self.pos;
                while let Some(c) = self.peek_char() {
                    if c.is_whitespace() || matches!(c, '>' | '/') {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                Ok((
                    name,
                    self.source[value_offset..self.pos].to_string(),
                    value_offset,
                ))
            }
            None => Err(ParseError::UnexpectedEof {
                path: self.path.to_string(),
                offset: self.pos,
            }),
        }
    }

    /// Split `text {{ expr }} more` into alternating strings and parsed
    /// expressions. `strings` ends up one longer than `expressions`.
    fn parse_interpolation(
        &self,
        text: &str,
        base_offset: usize,
    ) -> Result<Interpolation, ParseError> {
        let mut strings = Vec::new();
        let mut expressions = Vec::new();
        let mut rest = text;
        let mut consumed = 0;

        while let Some(start) = rest.find("{{") {
            strings.push(decode_entities(&rest[..start]));
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(ParseError::UnterminatedInterpolation {
                    path: self.path.to_string(),
                    offset: base_offset + consumed + start,
                });
            };
            expressions.push(parse_expression(after[..end].trim(), self.path)?);
            consumed += start + 2 + end + 2;
            rest = &after[end + 2..];
        }
        strings.push(decode_entities(rest));

        Ok(Interpolation {
            strings,
            expressions,
        })
    }
}

fn starts_tag_name(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Decode the handful of entities that show up in attribute values and
/// text. Unknown entities pass through untouched.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let entity_end = tail.find(';').filter(|end| *end <= 8);
        match entity_end {
            Some(end) => {
                let entity = &tail[1..end];
                let replacement = match entity {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => entity
                        .strip_prefix('#')
                        .and_then(|digits| digits.parse::<u32>().ok())
                        .and_then(char::from_u32),
                };
                match replacement {
                    Some(c) => {
                        decoded.push(c);
                        rest = &tail[end + 1..];
                    }
                    None => {
                        decoded.push('&');
                        rest = &tail[1..];
                    }
                }
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::expr::LiteralPrimitive;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Vec<Node> {
        parse_template(source, "test.html").unwrap()
    }

    fn only_element(nodes: &[Node]) -> &Element {
        let elements: Vec<_> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                _ => None,
            })
            .collect();
        assert_eq!(elements.len(), 1, "expected exactly one element");
        elements[0]
    }

    #[test]
    fn parses_nested_elements_and_text() {
        let nodes = parse("<div><span>hi</span> there</div>");
        let div = only_element(&nodes);
        assert_eq!(div.name, "div");
        assert_eq!(div.children.len(), 2);
        let Node::Element(span) = &div.children[0] else {
            panic!("expected span element");
        };
        assert_eq!(span.children, vec![Node::Text(Text { value: "hi".into() })]);
    }

    #[test]
    fn parses_plain_and_bound_attributes() {
        let nodes = parse(r#"<translate key="a.b" [other]="'x'"></translate>"#);
        let element = only_element(&nodes);
        assert_eq!(element.attribute("key").unwrap().value, "a.b");
        let input = element.input("other").unwrap();
        let Ast::WithSource(with_source) = &input.value else {
            panic!("expected source wrapper");
        };
        assert_eq!(
            *with_source.ast,
            Ast::LiteralPrimitive(LiteralPrimitive::String("x".into()))
        );
    }

    #[test]
    fn interpolated_attribute_becomes_binding() {
        let nodes = parse(r#"<translate key="{{ 'a' }}"></translate>"#);
        let element = only_element(&nodes);
        assert!(element.attribute("key").is_none());
        let input = element.input("key").unwrap();
        let Ast::WithSource(with_source) = &input.value else {
            panic!("expected source wrapper");
        };
        assert!(matches!(*with_source.ast, Ast::Interpolation(_)));
    }

    #[test]
    fn interpolated_text_is_not_a_text_node() {
        let nodes = parse("<p>{{ user.name }}</p>");
        let p = only_element(&nodes);
        assert!(matches!(p.children[0], Node::BoundText(_)));
        assert_eq!(p.text_children().count(), 0);
    }

    #[test]
    fn void_and_self_closing_elements_have_no_children() {
        let nodes = parse("<div><br>after<img src=\"x.png\"><custom-el/></div>");
        let div = only_element(&nodes);
        assert_eq!(div.children.len(), 4);
        let Node::Element(br) = &div.children[0] else {
            panic!("expected br");
        };
        assert!(br.children.is_empty());
    }

    #[test]
    fn comments_are_kept_but_inert() {
        let nodes = parse("<!-- note --><div></div>");
        assert!(matches!(
            &nodes[0],
            Node::Comment(Comment { value }) if value == " note "
        ));
    }

    #[test]
    fn decodes_entities_in_text_and_attributes() {
        let nodes = parse(r#"<p title="a &amp; b">1 &lt; 2</p>"#);
        let p = only_element(&nodes);
        assert_eq!(p.attribute("title").unwrap().value, "a & b");
        assert_eq!(
            p.children,
            vec![Node::Text(Text {
                value: "1 < 2".into()
            })]
        );
    }

    #[test]
    fn mismatched_close_tag_is_an_error() {
        let err = parse_template("<div><span></div>", "bad.html").unwrap_err();
        assert!(matches!(err, ParseError::MismatchedCloseTag { .. }));
    }

    #[test]
    fn unclosed_element_is_an_error() {
        let err = parse_template("<div>", "bad.html").unwrap_err();
        assert!(matches!(err, ParseError::UnclosedElement { .. }));
    }

    #[test]
    fn stray_close_tag_is_an_error() {
        let err = parse_template("</div>", "bad.html").unwrap_err();
        assert!(matches!(err, ParseError::StrayCloseTag { .. }));
    }

    #[test]
    fn bad_expression_in_binding_propagates() {
        let err = parse_template(r#"<translate [key]="'a"></translate>"#, "bad.html");
        assert!(matches!(err, Err(ParseError::Expression { .. })));
    }
}
