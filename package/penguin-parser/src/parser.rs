use log::debug;
use penguin_ast::dialect::DialectConfig;
use penguin_ast::expression::Expression;
use penguin_ast::{Identifier, LogicalLine, Statement};
use penguin_lexer::scan::{unquote, Scanner};
use penguin_source_span::LineNumber;
use crate::error::{ParserError, ParserErrorInner};
use crate::expression::{parse_arguments, parse_expression};

/// Shape of `callee(...)` at the start of a text.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum CallShape<'src> {
    /// the closing paren is the last char; holds the text between the parens
    Complete(&'src str),
    /// the opening paren is never closed
    Unclosed,
    /// something follows the closing paren
    Trailing,
}

pub struct Parser<'d> {
    dialect: &'d DialectConfig,
}

impl<'d> Parser<'d> {
    #[must_use = "Parser do nothing unless calling parsing function"]
    pub const fn new(dialect: &'d DialectConfig) -> Self {
        Self { dialect }
    }
}

impl Parser<'_> {
    /// Decides which statement a logical line is. First match wins:
    /// input assignment, assignment, print call, unsupported.
    ///
    /// # Errors
    /// Malformed variants of a permitted statement: bad variable name,
    /// `Print(`, `print` without parentheses, `input` without a quoted prompt.
    pub fn classify(&self, line: &LogicalLine) -> Result<Statement, ParserError> {
        let s = self.classify_inner(&line.text).map_err(|e| ParserError::new(e, line.line))?;
        debug!("line {}: {}", line.line, s.kind_name());

        Ok(s)
    }

    fn classify_inner(&self, text: &str) -> Result<Statement, ParserErrorInner> {
        if let Some(eq) = find_assignment_operator(text) {
            let lhs = text[..eq].trim();
            let rhs = text[eq + 1..].trim();

            if let Some(shape) = call_shape(rhs, "input") {
                if !self.dialect.allow_input {
                    return Ok(Self::unsupported(text))
                }

                let name = Self::assignment_target(lhs)?;
                let prompt = match shape {
                    CallShape::Complete(inner) => unquote(inner.trim()),
                    CallShape::Unclosed | CallShape::Trailing => None,
                };

                return prompt.map_or_else(
                    || Err(ParserErrorInner::InvalidInputSyntax { raw: rhs.to_string() }),
                    |prompt| Ok(Statement::InputAssignment { name, prompt }),
                )
            }

            if self.dialect.allow_assignment {
                return Ok(Statement::Assignment {
                    name: Self::assignment_target(lhs)?,
                    rhs: rhs.to_string(),
                })
            }
        }

        if self.dialect.allow_print {
            if let Some(s) = Self::classify_print(text)? {
                return Ok(s)
            }
        }

        Ok(Self::unsupported(text))
    }

    fn classify_print(text: &str) -> Result<Option<Statement>, ParserErrorInner> {
        let head_len = text
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(text.len());
        let head = &text[..head_len];

        if head == "print" {
            let rest = text[head_len..].trim_start();
            if !rest.starts_with('(') {
                return Err(ParserErrorInner::MissingParentheses { raw: text.to_string() })
            }

            return match call_shape(text, "print") {
                Some(CallShape::Complete(inner)) => Ok(Some(Statement::PrintCall { args: inner.trim().to_string() })),
                Some(CallShape::Unclosed) => Err(ParserErrorInner::MissingParentheses { raw: text.to_string() }),
                Some(CallShape::Trailing) | None => Ok(None),
            }
        }

        if head.eq_ignore_ascii_case("print") && text[head_len..].trim_start().starts_with('(') {
            return Err(ParserErrorInner::CaseSensitivity { written: head.to_string() })
        }

        Ok(None)
    }

    fn assignment_target(lhs: &str) -> Result<Identifier, ParserErrorInner> {
        Identifier::parse(lhs).map_err(|reason| ParserErrorInner::InvalidIdentifier {
            name: lhs.to_string(),
            reason,
        })
    }

    fn unsupported(text: &str) -> Statement {
        Statement::Unsupported { raw: text.to_string() }
    }

    /// # Errors
    /// See [`parse_expression`].
    pub fn parse_expression(&self, text: &str, line: LineNumber) -> Result<Expression, ParserError> {
        parse_expression(text, self.dialect).map_err(|e| ParserError::new(e, line))
    }

    /// # Errors
    /// See [`parse_arguments`].
    pub fn parse_arguments(&self, args: &str, line: LineNumber) -> Result<Vec<Expression>, ParserError> {
        parse_arguments(args, self.dialect).map_err(|e| ParserError::new(e, line))
    }
}

/// Byte index of the `=` that makes a line an assignment: outside quotes and
/// parentheses, and not part of `==`, `!=`, `<=` or `>=`.
fn find_assignment_operator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    Scanner::new(text)
        .filter(|s| s.is_top_level() && s.char == '=')
        .map(|s| s.index)
        .find(|&i| {
            let before = i.checked_sub(1).map(|b| bytes[b]);
            let after = bytes.get(i + 1).copied();
            !matches!(before, Some(b'=' | b'!' | b'<' | b'>')) && after != Some(b'=')
        })
}

/// `None` unless `text` starts with `callee`, optional spaces, and `(`.
fn call_shape<'src>(text: &'src str, callee: &str) -> Option<CallShape<'src>> {
    let rest = text.strip_prefix(callee)?.trim_start();
    if !rest.starts_with('(') {
        return None
    }

    let close = Scanner::new(rest)
        .skip(1)
        .find(|s| !s.in_string && s.char == ')' && s.depth == 0)
        .map(|s| s.index);

    let shape = match close {
        None => CallShape::Unclosed,
        Some(close) if close + 1 == rest.len() => CallShape::Complete(&rest[1..close]),
        Some(_) => CallShape::Trailing,
    };

    Some(shape)
}
