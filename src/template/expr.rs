//! Binding expression AST.
//!
//! A closed sum type over every expression form the template parser can
//! produce. Key extraction only ever *reads* this tree: it looks for
//! literal primitives nested inside container variants and treats every
//! other variant as a dead end.

use serde::Serialize;

/// A binding expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Ast {
    /// Empty expression, e.g. `[key]=""`.
    Empty,
    /// The implicit component receiver (also used for explicit `this`).
    ImplicitReceiver,
    LiteralPrimitive(LiteralPrimitive),
    Interpolation(Interpolation),
    LiteralArray(LiteralArray),
    LiteralMap(LiteralMap),
    BindingPipe(BindingPipe),
    Conditional(Conditional),
    Binary(Binary),
    PrefixNot(PrefixNot),
    Unary(Unary),
    PropertyRead(PropertyRead),
    KeyedRead(KeyedRead),
    Call(Call),
    /// Parsed expression together with its original source text.
    WithSource(AstWithSource),
}

/// Compile-time-constant scalar value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "literalType", content = "value")]
pub enum LiteralPrimitive {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

impl LiteralPrimitive {
    /// Render the literal the way JavaScript string coercion would.
    ///
    /// `5` becomes "5" rather than "5.0"; `1.5` stays "1.5".
    pub fn value_text(&self) -> String {
        match self {
            LiteralPrimitive::String(value) => value.clone(),
            LiteralPrimitive::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            LiteralPrimitive::Boolean(value) => value.to_string(),
            LiteralPrimitive::Null => "null".to_string(),
            LiteralPrimitive::Undefined => "undefined".to_string(),
        }
    }
}

/// `{{ a }} text {{ b }}` — alternating static strings and expressions.
///
/// `strings` always has one more element than `expressions`; either side
/// may contain empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpolation {
    pub strings: Vec<String>,
    pub expressions: Vec<Ast>,
}

/// `['a', 'b']`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteralArray {
    pub expressions: Vec<Ast>,
}

/// `{ first: 'a', second: 'b' }` — keys and values kept in parallel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteralMap {
    pub keys: Vec<String>,
    pub values: Vec<Ast>,
}

/// `value | pipeName:arg1:arg2`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingPipe {
    pub exp: Box<Ast>,
    pub name: String,
    pub args: Vec<Ast>,
}

/// `condition ? trueExp : falseExp`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditional {
    pub condition: Box<Ast>,
    pub true_exp: Box<Ast>,
    pub false_exp: Box<Ast>,
}

/// `left <op> right`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binary {
    pub operation: String,
    pub left: Box<Ast>,
    pub right: Box<Ast>,
}

/// `!expression`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixNot {
    pub expression: Box<Ast>,
}

/// `-expression` / `+expression`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unary {
    pub operator: String,
    pub expression: Box<Ast>,
}

/// `receiver.name` — a bare identifier reads off the implicit receiver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRead {
    pub receiver: Box<Ast>,
    pub name: String,
}

/// `receiver[key]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyedRead {
    pub receiver: Box<Ast>,
    pub key: Box<Ast>,
}

/// `receiver(args...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub receiver: Box<Ast>,
    pub args: Vec<Ast>,
}

/// Wrapper pairing a parsed expression with the text it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstWithSource {
    pub ast: Box<Ast>,
    pub source: String,
}

impl AstWithSource {
    pub fn new(ast: Ast, source: impl Into<String>) -> Self {
        Self {
            ast: Box::new(ast),
            source: source.into(),
        }
    }
}
