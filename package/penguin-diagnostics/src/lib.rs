#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

pub mod message;

use derive_more::Display;
use strum::{AsRefStr, EnumIter};
use thiserror::Error;
use penguin_source_span::LineNumber;

/// Something a front end can render against the source it came from.
pub trait Diagnostic {
    fn kind(&self) -> ErrorKind;

    fn human_readable_message(&self) -> &str;

    fn severity(&self) -> DiagnosticSeverity {
        self.kind().severity()
    }

    fn line(&self) -> Option<LineNumber>;
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum DiagnosticSeverity {
    /// A mistake in the learner's program.
    Error,
    /// The interpreter broke one of its own invariants.
    Defect,
}

/// Every way a run can fail. Closed: callers match on it instead of on
/// message text.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Display, AsRefStr, EnumIter)]
pub enum ErrorKind {
    #[display(fmt = "unterminated string")]
    UnterminatedString,
    #[display(fmt = "invalid variable name")]
    InvalidIdentifier,
    #[display(fmt = "unsupported statement")]
    UnsupportedStatement,
    #[display(fmt = "case sensitivity")]
    CaseSensitivity,
    #[display(fmt = "missing parentheses")]
    MissingParentheses,
    #[display(fmt = "undefined variable")]
    UndefinedVariable,
    #[display(fmt = "invalid expression")]
    InvalidExpression,
    #[display(fmt = "invalid input syntax")]
    InvalidInputSyntax,
    #[display(fmt = "empty source")]
    EmptySource,
    #[display(fmt = "source too long")]
    SourceTooLong,
    #[display(fmt = "unclassified")]
    Unclassified,
}

impl ErrorKind {
    #[must_use]
    pub const fn severity(self) -> DiagnosticSeverity {
        match self {
            Self::Unclassified => DiagnosticSeverity::Defect,
            _ => DiagnosticSeverity::Error,
        }
    }
}

/// A failure worded for a beginner, ready to render.
#[derive(Error, Eq, PartialEq, Clone, Debug)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub line: Option<LineNumber>,
    pub message: String,
}

impl ClassifiedError {
    #[must_use]
    pub const fn new(kind: ErrorKind, line: Option<LineNumber>, message: String) -> Self {
        Self { kind, line, message }
    }

    /// The message prefixed with `Line N: ` when the failure has a line.
    #[must_use]
    pub fn located_message(&self) -> String {
        self.line.map_or_else(
            || self.message.clone(),
            |line| format!("Line {line}: {}", self.message),
        )
    }
}

impl Diagnostic for ClassifiedError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn human_readable_message(&self) -> &str {
        &self.message
    }

    fn line(&self) -> Option<LineNumber> {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use penguin_source_span::LineNumber;
    use crate::{ClassifiedError, Diagnostic, DiagnosticSeverity, ErrorKind};

    #[test]
    fn only_unclassified_is_a_defect() {
        for kind in ErrorKind::iter() {
            let expected = if kind == ErrorKind::Unclassified { DiagnosticSeverity::Defect } else { DiagnosticSeverity::Error };
            assert_eq!(kind.severity(), expected, "{kind}");
        }
    }

    #[test]
    fn kind_tag_is_variant_name() {
        assert_eq!(ErrorKind::UndefinedVariable.as_ref(), "UndefinedVariable");
        assert_eq!(ErrorKind::CaseSensitivity.to_string(), "case sensitivity");
    }

    #[test]
    fn located_message() {
        let e = ClassifiedError::new(ErrorKind::EmptySource, None, "nothing".to_string());
        assert_eq!(e.located_message(), "nothing");
        assert_eq!(e.to_string(), "nothing");

        let e = ClassifiedError::new(ErrorKind::UndefinedVariable, LineNumber::try_new(3), "oops".to_string());
        assert_eq!(e.located_message(), "Line 3: oops");
        let diagnostic: &dyn Diagnostic = &e;
        assert_eq!(diagnostic.human_readable_message(), "oops");
        assert_eq!(diagnostic.line(), LineNumber::try_new(3));
        assert_eq!(diagnostic.severity(), DiagnosticSeverity::Error);
    }
}
