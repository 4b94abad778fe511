use std::fmt::{Display, Formatter};
use thiserror::Error as ThisError;
use penguin_ast::IdentifierRejection;
use penguin_source_span::{LineNumber, Pointed};

#[derive(ThisError, Debug, Eq, PartialEq, Clone)]
pub struct ParserError(Pointed<ParserErrorInner>);

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} (line {})", &self.0.data, &self.0.line))
    }
}

impl ParserError {
    #[must_use]
    pub const fn new(kind: ParserErrorInner, line: LineNumber) -> Self {
        Self(Pointed::new(kind, line))
    }

    #[must_use]
    pub const fn kind(&self) -> &ParserErrorInner {
        &self.0.data
    }

    #[must_use]
    pub const fn line(&self) -> LineNumber {
        self.0.line
    }
}

#[derive(ThisError, Debug, Eq, PartialEq, Clone)]
#[expect(clippy::module_name_repetitions)]
pub enum ParserErrorInner {
    #[error("`{name}` cannot be a variable name: {reason}")]
    InvalidIdentifier {
        name: String,
        reason: IdentifierRejection,
    },
    #[error("`{written}` must be written as `print`")]
    CaseSensitivity {
        written: String,
    },
    #[error("`print` requires parentheses: {raw}")]
    MissingParentheses {
        raw: String,
    },
    #[error("`input` requires a quoted prompt: {raw}")]
    InvalidInputSyntax {
        raw: String,
    },
    #[error("unrecognized expression: {text:?}")]
    InvalidExpression {
        text: String,
    },
}
