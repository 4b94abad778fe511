//! Right-hand sides and `print` arguments.

use penguin_ast::dialect::DialectConfig;
use penguin_ast::expression::Expression;
use penguin_ast::Identifier;
use penguin_lexer::scan::{split_top_level, unquote};
use crate::error::ParserErrorInner;

/// Parses one expression. Variables are not resolved here.
///
/// Recognized, in order: a single string literal, a number literal,
/// `True`/`False` when booleans are allowed, a top-level `+` chain, a bare
/// identifier.
///
/// # Errors
/// Anything else, including `+` chains the dialect does not allow and chains
/// with an empty operand.
pub fn parse_expression(text: &str, dialect: &DialectConfig) -> Result<Expression, ParserErrorInner> {
    let text = text.trim();
    let invalid = || ParserErrorInner::InvalidExpression { text: text.to_string() };

    if text.is_empty() {
        return Err(invalid())
    }

    if let Some(s) = unquote(text) {
        return Ok(Expression::StringLiteral(s))
    }

    if let Some(n) = parse_number(text) {
        return Ok(Expression::NumberLiteral(n))
    }

    if dialect.allow_booleans {
        match text {
            "True" => return Ok(Expression::BooleanLiteral(true)),
            "False" => return Ok(Expression::BooleanLiteral(false)),
            _ => {}
        }
    }

    let segments = split_top_level(text, '+');
    if segments.len() > 1 {
        if !dialect.allow_concatenation || segments.iter().any(|s| s.is_empty()) {
            return Err(invalid())
        }

        let segments = segments
            .into_iter()
            .map(|s| parse_expression(s, dialect))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(Expression::Concatenation { segments })
    }

    Identifier::parse(text)
        .map(|ident| Expression::Variable { ident })
        .map_err(|_| invalid())
}

/// Parses the text between `print(` and `)`. Empty text means no arguments.
///
/// # Errors
/// An empty argument such as in `print(a,,b)`, or any argument
/// [`parse_expression`] rejects.
pub fn parse_arguments(args: &str, dialect: &DialectConfig) -> Result<Vec<Expression>, ParserErrorInner> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(vec![])
    }

    split_top_level(args, ',')
        .into_iter()
        .map(|arg| {
            if arg.is_empty() {
                Err(ParserErrorInner::InvalidExpression { text: args.to_string() })
            } else {
                parse_expression(arg, dialect)
            }
        })
        .collect()
}

/// `-?[0-9]+(\.[0-9]+)?`
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !frac.map_or(true, all_digits) {
        return None
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use penguin_ast::dialect::DialectConfig;
    use penguin_ast::expression::Expression;
    use penguin_ast::Identifier;
    use crate::error::ParserErrorInner;
    use super::{parse_arguments, parse_expression, parse_number};

    fn parse(text: &str) -> Result<Expression, ParserErrorInner> {
        parse_expression(text, &DialectConfig::full())
    }

    fn var(name: &str) -> Expression {
        Expression::Variable { ident: Identifier::parse(name).unwrap() }
    }

    fn string(s: &str) -> Expression {
        Expression::StringLiteral(s.to_string())
    }

    #[test]
    fn literals() {
        assert_eq!(parse(" \"Alex\" "), Ok(string("Alex")));
        assert_eq!(parse("'Alex'"), Ok(string("Alex")));
        assert_eq!(parse("16"), Ok(Expression::NumberLiteral(16.0)));
        assert_eq!(parse("-3.5"), Ok(Expression::NumberLiteral(-3.5)));
        assert_eq!(parse("True"), Ok(Expression::BooleanLiteral(true)));
        assert_eq!(parse("False"), Ok(Expression::BooleanLiteral(false)));
    }

    #[test]
    fn numbers_follow_the_simple_pattern() {
        assert_eq!(parse_number("007"), Some(7.0));
        assert_eq!(parse_number("1."), None);
        assert_eq!(parse_number(".5"), None);
        assert_eq!(parse_number("1e5"), None);
        assert_eq!(parse_number("--1"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn booleans_need_the_dialect() {
        let dialect = DialectConfig { allow_booleans: false, ..DialectConfig::full() };
        assert!(matches!(parse_expression("True", &dialect), Err(ParserErrorInner::InvalidExpression { .. })));
    }

    #[test]
    fn variables() {
        assert_eq!(parse("name"), Ok(var("name")));
        assert!(matches!(parse("my name"), Err(ParserErrorInner::InvalidExpression { .. })));
        assert!(matches!(parse("\"Alex"), Err(ParserErrorInner::InvalidExpression { .. })));
    }

    #[test]
    fn concatenation() {
        assert_eq!(
            parse("\"Hello, \" + name + \"!\""),
            Ok(Expression::Concatenation { segments: vec![string("Hello, "), var("name"), string("!")] })
        );
        assert_eq!(parse("\"a+b\""), Ok(string("a+b")));
        assert_eq!(
            parse("5 + 3"),
            Ok(Expression::Concatenation { segments: vec![Expression::NumberLiteral(5.0), Expression::NumberLiteral(3.0)] })
        );
    }

    #[test]
    fn concatenation_rejects_empty_operands() {
        assert!(matches!(parse("\"a\" +"), Err(ParserErrorInner::InvalidExpression { .. })));
        assert!(matches!(parse("+ \"a\""), Err(ParserErrorInner::InvalidExpression { .. })));
        assert!(matches!(parse("\"a\" + + \"b\""), Err(ParserErrorInner::InvalidExpression { .. })));
    }

    #[test]
    fn concatenation_needs_the_dialect() {
        let err = parse_expression("\"a\" + \"b\"", &DialectConfig::input()).unwrap_err();
        assert_eq!(err, ParserErrorInner::InvalidExpression { text: "\"a\" + \"b\"".to_string() });
    }

    #[test]
    fn arguments() {
        let dialect = DialectConfig::full();
        assert_eq!(parse_arguments("", &dialect), Ok(vec![]));
        assert_eq!(parse_arguments("name, age", &dialect), Ok(vec![var("name"), var("age")]));
        assert_eq!(parse_arguments("\"a, b\"", &dialect), Ok(vec![string("a, b")]));
        assert!(matches!(parse_arguments("a,,b", &dialect), Err(ParserErrorInner::InvalidExpression { .. })));
        assert!(matches!(parse_arguments("a,", &dialect), Err(ParserErrorInner::InvalidExpression { .. })));
    }
}
