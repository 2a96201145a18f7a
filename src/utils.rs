//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

/// First inline template inside a component definition, whichever quote
/// style it uses.
static INLINE_TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)template\s*:\s*(?:`([^`]*)`|"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Checks if a path identifies a component-definition source file rather
/// than a plain template file.
///
/// # Examples
///
/// ```
/// use ngkeys::utils::is_component_file;
///
/// assert!(is_component_file("src/app/home.component.ts"));
/// assert!(is_component_file("legacy/widget.JS"));
/// assert!(!is_component_file("src/app/home.component.html"));
/// ```
pub fn is_component_file(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".ts") || lower.ends_with(".js")
}

/// Isolate the inline template text from a component definition.
///
/// Returns the empty string when the component carries no inline template,
/// which parses to an empty node list downstream.
pub fn extract_inline_template(source: &str) -> String {
    INLINE_TEMPLATE_REGEX
        .captures(source)
        .and_then(|capture| capture.get(1).or_else(|| capture.get(2)).or_else(|| capture.get(3)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_component_file() {
        assert!(is_component_file("home.component.ts"));
        assert!(is_component_file("home.component.js"));
        assert!(is_component_file("nested/dir/app.TS"));

        assert!(!is_component_file("home.component.html"));
        assert!(!is_component_file("styles.css"));
        assert!(!is_component_file("tsconfig.json"));
    }

    #[test]
    fn extracts_backtick_template() {
        let source = "@Component({ template: `<div>inline</div>` }) class C {}";
        assert_eq!(extract_inline_template(source), "<div>inline</div>");
    }

    #[test]
    fn extracts_multiline_template() {
        let source = "@Component({\n  template: `\n    <translate>Hi</translate>\n  `\n})";
        assert!(extract_inline_template(source).contains("<translate>Hi</translate>"));
    }

    #[test]
    fn extracts_single_and_double_quoted_templates() {
        assert_eq!(
            extract_inline_template(r#"template: "<b>x</b>""#),
            "<b>x</b>"
        );
        assert_eq!(extract_inline_template("template: '<i>y</i>'"), "<i>y</i>");
    }

    #[test]
    fn missing_template_yields_empty_string() {
        assert_eq!(extract_inline_template("export class Service {}"), "");
    }

    #[test]
    fn only_first_template_is_used() {
        let source = "template: `<p>one</p>` other: 1, template: `<p>two</p>`";
        assert_eq!(extract_inline_template(source), "<p>one</p>");
    }
}
