#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]
pub mod error;
pub mod scan;

use log::{debug, trace};
use penguin_ast::dialect::Limits;
use penguin_ast::LogicalLine;
use penguin_source_span::LineNumber;
use crate::error::LexerError;
use crate::scan::{strip_inline_comment, unbalanced_quote};

/// Turns raw source into [`LogicalLine`]s.
///
/// Every line is validated here, so a quote left open on the last line
/// fails the whole run before the first line executes.
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    limits: Limits,
    reject_empty: bool,
}

impl<'src> Lexer<'src> {
    #[must_use = "Lexer do nothing unless calling split_lines"]
    pub fn create(source: &'src str) -> Self {
        Self {
            source,
            limits: Limits::default(),
            reject_empty: false,
        }
    }

    #[must_use]
    pub const fn limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    #[must_use]
    pub const fn reject_empty(self, reject_empty: bool) -> Self {
        Self { reject_empty, ..self }
    }
}

impl Lexer<'_> {
    /// # Errors
    /// - the source exceeds [`Limits`]
    /// - some line, comment excluded, has an odd count of `"` or `'`
    /// - no statement remains and empty sources are rejected
    pub fn split_lines(&self) -> Result<Vec<LogicalLine>, LexerError> {
        let bytes = self.source.len();
        if bytes > self.limits.max_source_bytes {
            return Err(LexerError::SourceTooLong { bytes, max: self.limits.max_source_bytes })
        }

        let raw_lines = self.source.lines().collect::<Vec<_>>();
        if raw_lines.len() > self.limits.max_lines {
            return Err(LexerError::TooManyLines { lines: raw_lines.len(), max: self.limits.max_lines })
        }

        let mut logical = Vec::with_capacity(raw_lines.len());
        for (index, raw) in raw_lines.into_iter().enumerate() {
            let line = LineNumber::from_index(index);
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                trace!("line {line}: skipped");
                continue
            }

            let text = strip_inline_comment(trimmed).trim_end();
            if let Some(quote) = unbalanced_quote(text) {
                debug!("line {line}: odd number of {quote}");
                return Err(LexerError::UnterminatedString { line, quote })
            }

            trace!("line {line}: {text:?}");
            logical.push(LogicalLine {
                line,
                text: text.to_string(),
            });
        }

        if logical.is_empty() && self.reject_empty {
            return Err(LexerError::EmptySource)
        }

        debug!("split into {} logical line(s)", logical.len());
        Ok(logical)
    }
}

/// Splits with default limits, accepting empty sources.
///
/// # Errors
/// See [`Lexer::split_lines`].
pub fn split_lines(source: &str) -> Result<Vec<LogicalLine>, LexerError> {
    Lexer::create(source).split_lines()
}
