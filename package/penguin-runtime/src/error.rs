use thiserror::Error;
use penguin_lexer::error::LexerError;
use penguin_parser::error::ParserError;
use penguin_source_span::LineNumber;

#[derive(Error, Debug, Eq, PartialEq, Clone)]
#[allow(clippy::module_name_repetitions)]
pub enum RuntimeError {
    #[error("variable {identifier} is not defined")]
    UndefinedVariable {
        identifier: Box<str>,
    },
    /// A bare word the learner most likely meant as text.
    #[error("{word} is used as a variable but looks like text")]
    UnquotedText {
        word: Box<str>,
    },
    #[error("statement is not supported: {raw}")]
    Unsupported {
        raw: Box<str>,
    },
    #[error("internal error: {context}")]
    Internal {
        context: &'static str,
    },
}

/// Why a run stopped.
#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum ExecutionFailure {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error("{error} (line {line})")]
    Runtime {
        line: LineNumber,
        #[source]
        error: RuntimeError,
    },
}

impl ExecutionFailure {
    #[must_use]
    pub fn line(&self) -> Option<LineNumber> {
        match self {
            Self::Lexer(e) => e.line(),
            Self::Parser(e) => Some(e.line()),
            Self::Runtime { line, .. } => Some(*line),
        }
    }
}
