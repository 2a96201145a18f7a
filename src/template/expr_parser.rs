//! Recursive-descent parser for binding expressions.
//!
//! Precedence, loosest first: pipes, conditional, `|| ??`, `&&`, equality,
//! relational, additive, multiplicative, prefix, call/member chain, primary.

use super::error::ParseError;
use super::expr::{
    Ast, AstWithSource, Binary, BindingPipe, Call, Conditional, KeyedRead, LiteralArray,
    LiteralMap, LiteralPrimitive, PrefixNot, PropertyRead, Unary,
};
use super::lexer::{Lexed, Token, tokenize};

/// Parse a bound attribute value into an [`Ast::WithSource`] wrapper.
pub fn parse_binding(source: &str, path: &str) -> Result<Ast, ParseError> {
    let ast = parse_expression(source, path)?;
    Ok(Ast::WithSource(AstWithSource::new(ast, source)))
}

/// Parse a bare expression (no source wrapper).
pub fn parse_expression(source: &str, path: &str) -> Result<Ast, ParseError> {
    let tokens = tokenize(source).map_err(|(offset, message)| ParseError::Expression {
        path: path.to_string(),
        expr: source.to_string(),
        message: format!("{message} at offset {offset}"),
    })?;

    if tokens.is_empty() {
        return Ok(Ast::Empty);
    }

    let mut parser = ExprParser {
        tokens,
        index: 0,
        path,
        source,
    };
    let ast = parser.parse_pipe()?;

    match parser.peek() {
        None => Ok(ast),
        Some(lexed) => Err(parser.error(format!("unexpected trailing token {:?}", lexed.token))),
    }
}

struct ExprParser<'a> {
    tokens: Vec<Lexed>,
    index: usize,
    path: &'a str,
    source: &'a str,
}

impl ExprParser<'_> {
    fn peek(&self) -> Option<&Lexed> {
        self.tokens.get(self.index)
    }

    fn eat_operator(&mut self, op: &str) -> bool {
        match self.peek() {
            Some(Lexed {
                token: Token::Operator(found),
                ..
            }) if found == op => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    fn peek_operator(&self, candidates: &[&str]) -> Option<String> {
        match self.peek() {
            Some(Lexed {
                token: Token::Operator(found),
                ..
            }) if candidates.contains(&found.as_str()) => Some(found.clone()),
            _ => None,
        }
    }

    fn expect_operator(&mut self, op: &str) -> Result<(), ParseError> {
        if self.eat_operator(op) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{op}`")))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(Lexed {
                token: Token::Identifier(name),
                ..
            }) => {
                let name = name.clone();
                self.index += 1;
                Ok(name)
            }
            _ => Err(self.error("expected identifier".to_string())),
        }
    }

    fn error(&self, message: String) -> ParseError {
        ParseError::Expression {
            path: self.path.to_string(),
            expr: self.source.to_string(),
            message,
        }
    }

    /// `expr | pipeName:arg1:arg2 | other`
    fn parse_pipe(&mut self) -> Result<Ast, ParseError> {
        let mut result = self.parse_conditional()?;
        while self.eat_operator("|") {
            let name = self.expect_identifier()?;
            let mut args = Vec::new();
            while self.eat_operator(":") {
                args.push(self.parse_conditional()?);
            }
            result = Ast::BindingPipe(BindingPipe {
                exp: Box::new(result),
                name,
                args,
            });
        }
        Ok(result)
    }

    fn parse_conditional(&mut self) -> Result<Ast, ParseError> {
        let condition = self.parse_binary(0)?;
        if !self.eat_operator("?") {
            return Ok(condition);
        }
        let true_exp = self.parse_conditional()?;
        self.expect_operator(":")?;
        let false_exp = self.parse_conditional()?;
        Ok(Ast::Conditional(Conditional {
            condition: Box::new(condition),
            true_exp: Box::new(true_exp),
            false_exp: Box::new(false_exp),
        }))
    }

    /// Binary operator ladder; `level` indexes into [`BINARY_LEVELS`].
    fn parse_binary(&mut self, level: usize) -> Result<Ast, ParseError> {
        if level >= BINARY_LEVELS.len() {
            return self.parse_prefix();
        }
        let mut left = self.parse_binary(level + 1)?;
        while let Some(operation) = self.peek_operator(BINARY_LEVELS[level]) {
            self.index += 1;
            let right = self.parse_binary(level + 1)?;
            left = Ast::Binary(Binary {
                operation,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Ast, ParseError> {
        if self.eat_operator("!") {
            let expression = self.parse_prefix()?;
            return Ok(Ast::PrefixNot(PrefixNot {
                expression: Box::new(expression),
            }));
        }
        if let Some(operator) = self.peek_operator(&["-", "+"]) {
            self.index += 1;
            let expression = self.parse_prefix()?;
            return Ok(Ast::Unary(Unary {
                operator,
                expression: Box::new(expression),
            }));
        }
        self.parse_call_chain()
    }

    /// Postfix member access, keyed reads, and calls.
    fn parse_call_chain(&mut self) -> Result<Ast, ParseError> {
        let mut receiver = self.parse_primary()?;
        loop {
            if self.eat_operator(".") {
                let name = self.expect_identifier()?;
                receiver = Ast::PropertyRead(PropertyRead {
                    receiver: Box::new(receiver),
                    name,
                });
            } else if self.eat_operator("[") {
                let key = self.parse_pipe()?;
                self.expect_operator("]")?;
                receiver = Ast::KeyedRead(KeyedRead {
                    receiver: Box::new(receiver),
                    key: Box::new(key),
                });
            } else if self.eat_operator("(") {
                let mut args = Vec::new();
                if !self.eat_operator(")") {
                    loop {
                        args.push(self.parse_pipe()?);
                        if !self.eat_operator(",") {
                            break;
                        }
                    }
                    self.expect_operator(")")?;
                }
                receiver = Ast::Call(Call {
                    receiver: Box::new(receiver),
                    args,
                });
            } else {
                return Ok(receiver);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Ast, ParseError> {
        let Some(lexed) = self.peek().cloned() else {
            return Err(self.error("unexpected end of expression".to_string()));
        };

        match lexed.token {
            Token::String(value) => {
                self.index += 1;
                Ok(Ast::LiteralPrimitive(LiteralPrimitive::String(value)))
            }
            Token::Number(value) => {
                self.index += 1;
                Ok(Ast::LiteralPrimitive(LiteralPrimitive::Number(value)))
            }
            Token::Identifier(name) => {
                self.index += 1;
                Ok(match name.as_str() {
                    "true" => Ast::LiteralPrimitive(LiteralPrimitive::Boolean(true)),
                    "false" => Ast::LiteralPrimitive(LiteralPrimitive::Boolean(false)),
                    "null" => Ast::LiteralPrimitive(LiteralPrimitive::Null),
                    "undefined" => Ast::LiteralPrimitive(LiteralPrimitive::Undefined),
                    "this" => Ast::ImplicitReceiver,
                    _ => Ast::PropertyRead(PropertyRead {
                        receiver: Box::new(Ast::ImplicitReceiver),
                        name,
                    }),
                })
            }
            Token::Operator(op) if op == "(" => {
                self.index += 1;
                let inner = self.parse_pipe()?;
                self.expect_operator(")")?;
                Ok(inner)
            }
            Token::Operator(op) if op == "[" => {
                self.index += 1;
                let mut expressions = Vec::new();
                if !self.eat_operator("]") {
                    loop {
                        expressions.push(self.parse_pipe()?);
                        if !self.eat_operator(",") {
                            break;
                        }
                    }
                    self.expect_operator("]")?;
                }
                Ok(Ast::LiteralArray(LiteralArray { expressions }))
            }
            Token::Operator(op) if op == "{" => {
                self.index += 1;
                let mut keys = Vec::new();
                let mut values = Vec::new();
                if !self.eat_operator("}") {
                    loop {
                        keys.push(self.parse_map_key()?);
                        self.expect_operator(":")?;
                        values.push(self.parse_pipe()?);
                        if !self.eat_operator(",") {
                            break;
                        }
                    }
                    self.expect_operator("}")?;
                }
                Ok(Ast::LiteralMap(LiteralMap { keys, values }))
            }
            Token::Operator(op) => Err(self.error(format!("unexpected operator `{op}`"))),
        }
    }

    fn parse_map_key(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(Lexed {
                token: Token::Identifier(name),
                ..
            }) => {
                let name = name.clone();
                self.index += 1;
                Ok(name)
            }
            Some(Lexed {
                token: Token::String(value),
                ..
            }) => {
                let value = value.clone();
                self.index += 1;
                Ok(value)
            }
            _ => Err(self.error("expected map key".to_string())),
        }
    }
}

/// Binary operators grouped from loosest to tightest binding.
const BINARY_LEVELS: &[&[&str]] = &[
    &["||", "??"],
    &["&&"],
    &["==", "!=", "===", "!=="],
    &["<", ">", "<=", ">="],
    &["+", "-"],
    &["*", "/", "%"],
];
