use thiserror::Error;

/// Errors produced while parsing template markup or binding expressions.
///
/// Offsets are byte offsets into the parsed text. For inline component
/// templates the offset is relative to the isolated template, not the
/// surrounding component file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{path}: unexpected end of input at offset {offset}")]
    UnexpectedEof { path: String, offset: usize },

    #[error("{path}: unclosed element <{name}> starting at offset {offset}")]
    UnclosedElement {
        path: String,
        offset: usize,
        name: String,
    },

    #[error("{path}: closing tag </{found}> at offset {offset} does not match open <{expected}>")]
    MismatchedCloseTag {
        path: String,
        offset: usize,
        expected: String,
        found: String,
    },

    #[error("{path}: malformed attribute in <{element}> at offset {offset}")]
    MalformedAttribute {
        path: String,
        offset: usize,
        element: String,
    },

    #[error("{path}: closing tag </{name}> at offset {offset} has no matching open tag")]
    StrayCloseTag {
        path: String,
        offset: usize,
        name: String,
    },

    #[error("{path}: unterminated comment starting at offset {offset}")]
    UnterminatedComment { path: String, offset: usize },

    #[error("{path}: unterminated interpolation starting at offset {offset}")]
    UnterminatedInterpolation { path: String, offset: usize },

    #[error("{path}: invalid expression `{expr}`: {message}")]
    Expression {
        path: String,
        expr: String,
        message: String,
    },
}
