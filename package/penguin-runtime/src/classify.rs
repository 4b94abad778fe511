//! Turns any [`ExecutionFailure`] into exactly one [`ClassifiedError`].

use log::error;
use penguin_ast::dialect::DialectConfig;
use penguin_diagnostics::{message, ClassifiedError, ErrorKind};
use penguin_lexer::error::LexerError;
use penguin_parser::error::ParserErrorInner;
use crate::error::{ExecutionFailure, RuntimeError};

#[must_use]
pub fn classify(failure: &ExecutionFailure, dialect: &DialectConfig) -> ClassifiedError {
    let line = failure.line();
    let (kind, message) = match failure {
        ExecutionFailure::Lexer(e) => classify_lexer(e),
        ExecutionFailure::Parser(e) => match e.kind() {
            ParserErrorInner::InvalidIdentifier { name, reason } => {
                (ErrorKind::InvalidIdentifier, message::invalid_identifier(name, *reason))
            }
            ParserErrorInner::CaseSensitivity { written } => {
                (ErrorKind::CaseSensitivity, message::case_sensitivity(written))
            }
            ParserErrorInner::MissingParentheses { .. } => {
                (ErrorKind::MissingParentheses, message::missing_parentheses())
            }
            ParserErrorInner::InvalidInputSyntax { .. } => {
                (ErrorKind::InvalidInputSyntax, message::invalid_input_syntax())
            }
            ParserErrorInner::InvalidExpression { text } => {
                (ErrorKind::InvalidExpression, message::invalid_expression(text, None))
            }
        },
        ExecutionFailure::Runtime { error, .. } => match error {
            RuntimeError::UndefinedVariable { identifier } => {
                (ErrorKind::UndefinedVariable, message::undefined_variable(identifier))
            }
            RuntimeError::UnquotedText { word } => {
                (ErrorKind::InvalidExpression, message::invalid_expression(word, Some(word.as_ref())))
            }
            RuntimeError::Unsupported { raw } => {
                (ErrorKind::UnsupportedStatement, message::unsupported_statement(raw, &allowed_forms(dialect)))
            }
            RuntimeError::Internal { context } => {
                error!("internal defect, reported as unclassified: {context}");
                (ErrorKind::Unclassified, message::unclassified())
            }
        },
    };

    ClassifiedError::new(kind, line, message)
}

fn classify_lexer(e: &LexerError) -> (ErrorKind, String) {
    match e {
        LexerError::UnterminatedString { quote, .. } => {
            (ErrorKind::UnterminatedString, message::unterminated_string(*quote))
        }
        LexerError::SourceTooLong { bytes, max } => {
            (ErrorKind::SourceTooLong, message::source_too_long(&format!("{bytes} bytes, at most {max}")))
        }
        LexerError::TooManyLines { lines, max } => {
            (ErrorKind::SourceTooLong, message::source_too_long(&format!("{lines} lines, at most {max}")))
        }
        LexerError::EmptySource => (ErrorKind::EmptySource, message::empty_source()),
    }
}

/// Statement forms a dialect accepts, worded for a learner.
fn allowed_forms(dialect: &DialectConfig) -> Vec<&'static str> {
    [
        (dialect.allow_print, "print(...)"),
        (dialect.allow_assignment, "name = value"),
        (dialect.allow_input, "name = input(\"question\")"),
    ]
    .into_iter()
    .filter_map(|(allowed, form)| allowed.then_some(form))
    .collect()
}

#[cfg(test)]
mod tests {
    use penguin_ast::dialect::DialectConfig;
    use penguin_diagnostics::ErrorKind;
    use penguin_lexer::error::LexerError;
    use penguin_source_span::LineNumber;
    use crate::classify::{allowed_forms, classify};
    use crate::error::{ExecutionFailure, RuntimeError};

    #[test]
    fn internal_defects_use_the_fallback() {
        let failure = ExecutionFailure::Runtime {
            line: LineNumber::from_index(0),
            error: RuntimeError::Internal { context: "test" },
        };
        let e = classify(&failure, &DialectConfig::full());
        assert_eq!(e.kind, ErrorKind::Unclassified);
        assert!(e.message.contains("Spelling mistakes"));
        assert!(!e.message.contains("test"));
    }

    #[test]
    fn limits_share_a_kind() {
        let dialect = DialectConfig::full();
        let bytes = classify(&LexerError::SourceTooLong { bytes: 10, max: 5 }.into(), &dialect);
        let lines = classify(&LexerError::TooManyLines { lines: 10, max: 5 }.into(), &dialect);
        assert_eq!(bytes.kind, ErrorKind::SourceTooLong);
        assert_eq!(lines.kind, ErrorKind::SourceTooLong);
        assert_eq!(lines.line, None);
        assert!(bytes.message.contains("(10 bytes, at most 5)"));
        assert!(lines.message.contains("(10 lines, at most 5)"));
    }

    #[test]
    fn allowed_forms_follow_dialect() {
        assert_eq!(allowed_forms(&DialectConfig::print_only()), vec!["print(...)"]);
        assert_eq!(allowed_forms(&DialectConfig::full()).len(), 3);
    }
}
