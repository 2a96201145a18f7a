//! Tokenizer for binding expressions.

/// A single expression token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    /// Single- or double-quoted string literal, unescaped.
    String(String),
    Number(f64),
    /// Operator or punctuation: `+ - * / % == != === !== && || < > <= >=
    /// ! ? : | . , ( ) [ ] { } =`
    Operator(String),
}

/// Token plus the byte offset it starts at, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub token: Token,
    pub offset: usize,
}

/// Tokenize an expression. Returns `Err` with an offset and message on the
/// first unrecognized character or unterminated string.
pub fn tokenize(input: &str) -> Result<Vec<Lexed>, (usize, String)> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let c = bytes[pos] as char;

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if c == '\'' || c == '"' {
            let (value, next) = lex_string(input, pos, c)?;
            tokens.push(Lexed {
                token: Token::String(value),
                offset: start,
            });
            pos = next;
            continue;
        }

        if c.is_ascii_digit() {
            let (value, next) = lex_number(input, pos);
            tokens.push(Lexed {
                token: Token::Number(value),
                offset: start,
            });
            pos = next;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let mut end = pos + 1;
            while end < bytes.len() {
                let b = bytes[end] as char;
                if b.is_ascii_alphanumeric() || b == '_' || b == '$' {
                    end += 1;
                } else {
                    break;
                }
            }
            tokens.push(Lexed {
                token: Token::Identifier(input[pos..end].to_string()),
                offset: start,
            });
            pos = end;
            continue;
        }

        // Multi-character operators first, longest match wins.
        let rest = &input[pos..];
        let operator = ["===", "!==", "==", "!=", "<=", ">=", "&&", "||", "??"]
            .iter()
            .find(|op| rest.starts_with(**op))
            .map(|op| op.to_string())
            .or_else(|| {
                matches!(
                    c,
                    '+' | '-'
                        | '*'
                        | '/'
                        | '%'
                        | '!'
                        | '?'
                        | ':'
                        | '|'
                        | '.'
                        | ','
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '{'
                        | '}'
                        | '<'
                        | '>'
                        | '='
                )
                .then(|| c.to_string())
            });

        match operator {
            Some(op) => {
                pos += op.len();
                tokens.push(Lexed {
                    token: Token::Operator(op),
                    offset: start,
                });
            }
            None => return Err((start, format!("unexpected character `{c}`"))),
        }
    }

    Ok(tokens)
}

fn lex_string(input: &str, start: usize, quote: char) -> Result<(String, usize), (usize, String)> {
    let mut value = String::new();
    let mut chars = input[start + 1..].char_indices();

    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Ok((value, start + 1 + i + c.len_utf8()));
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                }),
                None => break,
            }
            continue;
        }
        value.push(c);
    }

    Err((start, "unterminated string literal".to_string()))
}

fn lex_number(input: &str, start: usize) -> (f64, usize) {
    let bytes = input.as_bytes();
    let mut end = start;
    let mut seen_dot = false;

    while end < bytes.len() {
        let c = bytes[end] as char;
        if c.is_ascii_digit() {
            end += 1;
        } else if c == '.' && !seen_dot && end + 1 < bytes.len() && bytes[end + 1].is_ascii_digit()
        {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }

    // The slice is all digits and at most one interior dot.
    let value = input[start..end].parse::<f64>().unwrap_or(0.0);
    (value, end)
}
