use thiserror::Error;
use penguin_source_span::LineNumber;

#[derive(Error, Debug, Eq, PartialEq, Clone)]
#[allow(clippy::module_name_repetitions)]
pub enum LexerError {
    #[error("line {line}: string literal opened with {quote} is never closed")]
    UnterminatedString {
        line: LineNumber,
        quote: char,
    },
    #[error("source is {bytes} bytes long, limit is {max}")]
    SourceTooLong {
        bytes: usize,
        max: usize,
    },
    #[error("source has {lines} lines, limit is {max}")]
    TooManyLines {
        lines: usize,
        max: usize,
    },
    #[error("source contains no statements")]
    EmptySource,
}

impl LexerError {
    #[must_use]
    pub const fn line(&self) -> Option<LineNumber> {
        match self {
            Self::UnterminatedString { line, .. } => Some(*line),
            Self::SourceTooLong { .. } | Self::TooManyLines { .. } | Self::EmptySource => None,
        }
    }
}
