#![deny(dead_code)]
#![allow(clippy::unnecessary_wraps)]

fn main() {
    env_logger::init();
    eprintln!("start");
    Test::run_all();
    eprintln!("end");
}

use log::debug;
use thiserror::Error;
use penguin_ast::dialect::DialectConfig;
use penguin_diagnostics::{ClassifiedError, ErrorKind};
use penguin_runtime::{ExecutionResult, Interpreter};

type Err = TestFailureCause;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum TestFailureCause {
    #[error("program failure: {0}")]
    Program(#[from] ClassifiedError),
}

pub struct Test;

macro_rules! lines {
    () => {
        Vec::<String>::new()
    };
    ($($x:expr),+ $(,)?) => {
        vec![$($x.to_string()),+]
    };
}

impl Test {
    fn run_with(dialect: DialectConfig, src: &str, inputs: &[&str]) -> ExecutionResult {
        debug!("src:\n{}", src);
        let result = Interpreter::new(dialect).execute(src, inputs.iter().copied());
        debug!("{result:?}");
        result
    }

    fn outputs_with(dialect: DialectConfig, src: &str, inputs: &[&str]) -> Result<Vec<String>, Err> {
        let result = Self::run_with(dialect, src, inputs);
        match result.errors.into_iter().next() {
            None => Ok(result.output_lines),
            Some(e) => Err(e.into()),
        }
    }

    fn outputs(src: &str) -> Result<Vec<String>, Err> {
        Self::outputs_with(DialectConfig::full(), src, &[])
    }

    fn failure_with(dialect: DialectConfig, src: &str) -> ErrorKind {
        let result = Self::run_with(dialect, src, &[]);
        assert!(!result.success, "expected failure: {src}");
        result.first_error().map_or(ErrorKind::Unclassified, |e| e.kind)
    }

    fn failure(src: &str) -> ErrorKind {
        Self::failure_with(DialectConfig::full(), src)
    }

    fn print_literal() {
        assert_eq!(Self::outputs("print(\"Hello, World!\")\n").expect("runs"), lines!["Hello, World!"]);
        assert_eq!(Self::outputs("print('single')\nprint(42)\nprint(-2.5)").expect("runs"), lines!["single", "42", "-2.5"]);
        assert_eq!(Self::outputs("print()").expect("runs"), lines![""]);
    }

    fn print_only_lesson() {
        let dialect = DialectConfig::print_only();
        assert_eq!(Self::outputs_with(dialect, "print(\"I am learning Python\")", &[]).expect("runs"), lines!["I am learning Python"]);
        assert_eq!(Self::failure_with(dialect, "name = \"Alex\""), ErrorKind::UnsupportedStatement);
        assert_eq!(Self::failure_with(dialect, "print(\"a\" + \"b\")"), ErrorKind::InvalidExpression);
    }

    fn simple_variable_assignment() {
        assert_eq!(Self::outputs("x = 1\nprint(x)").expect("runs"), lines!["1"]);
        assert_eq!(Self::outputs("x = 1\ny = x\nprint(y)").expect("runs"), lines!["1"]);
        assert_eq!(Self::outputs("name = \"Alex\"\nage = 16\nprint(name, age)").expect("runs"), lines!["Alex 16"]);
    }

    fn variable_reassign() {
        assert_eq!(Self::outputs("x = 5\nx = \"five\"\nprint(x)").expect("runs"), lines!["five"]);
        let result = Self::run_with(DialectConfig::full(), "a = 1\nb = 2\na = 3", &[]);
        let names = result.variables.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(result.variables[0].display, "3");
    }

    fn string_concat() {
        assert_eq!(Self::outputs("name = \"Alex\"\nprint(\"Hello \" + name)").expect("runs"), lines!["Hello Alex"]);
        assert_eq!(Self::outputs("a = \"x\"\nb = a + a + a\nprint(b)").expect("runs"), lines!["xxx"]);
        assert_eq!(Self::outputs("print(\"Score: \" + 10)").expect("runs"), lines!["Score: 10"]);
        assert_eq!(Self::outputs("print(\"1 + 1\")").expect("runs"), lines!["1 + 1"]);
    }

    fn input_lesson() {
        let src = "name = input(\"What is your name? \")\ncolor = input(\"Favourite color? \")\nprint(name, \"likes\", color)";
        assert_eq!(
            Self::outputs_with(DialectConfig::input(), src, &["Alex", "blue"]).expect("runs"),
            lines!["What is your name? Alex", "Favourite color? blue", "Alex likes blue"]
        );
        assert_eq!(
            Self::outputs_with(DialectConfig::input(), src, &["Alex"]).expect("runs"),
            lines!["What is your name? Alex", "Favourite color? ", "Alex likes "]
        );
    }

    fn booleans() {
        assert_eq!(Self::outputs("done = False\nprint(done)").expect("runs"), lines!["False"]);
        assert_eq!(Self::failure_with(DialectConfig::concatenation(), "done = False"), ErrorKind::InvalidExpression);
    }

    fn comment() {
        assert_eq!(Self::outputs("# my first program\nprint(\"hi\") # says hi\n\n").expect("runs"), lines!["hi"]);
        assert_eq!(Self::outputs("print(\"# not a comment\")").expect("runs"), lines!["# not a comment"]);
        assert_eq!(Self::outputs("# only comments").expect("runs"), lines![]);
    }

    fn beginner_mistakes() {
        assert_eq!(Self::failure("print(\"Hello)"), ErrorKind::UnterminatedString);
        assert_eq!(Self::failure("Print(\"hi\")"), ErrorKind::CaseSensitivity);
        assert_eq!(Self::failure("PRINT(\"hi\")"), ErrorKind::CaseSensitivity);
        assert_eq!(Self::failure("print \"hi\""), ErrorKind::MissingParentheses);
        assert_eq!(Self::failure("print(score)"), ErrorKind::UndefinedVariable);
        assert_eq!(Self::failure("print(hello)"), ErrorKind::InvalidExpression);
        assert_eq!(Self::failure("1st_place = \"gold\""), ErrorKind::InvalidIdentifier);
        assert_eq!(Self::failure("my name = \"Alex\""), ErrorKind::InvalidIdentifier);
        assert_eq!(Self::failure("name = input(What is your name?)"), ErrorKind::InvalidInputSyntax);
        assert_eq!(Self::failure("if x == 1:"), ErrorKind::UnsupportedStatement);
        assert_eq!(Self::failure("print(\"a\",, \"b\")"), ErrorKind::InvalidExpression);
    }

    fn friendly_messages() {
        let result = Self::run_with(DialectConfig::full(), "print(\"ok\")\nprint(score)", &[]);
        let message = result.error_message().expect("has error");
        assert!(message.starts_with("Line 2: "), "{message}");
        assert!(message.contains("score = \"some value\""), "{message}");

        let result = Self::run_with(DialectConfig::full(), "print(\"Hello)", &[]);
        assert!(result.error_message().expect("has error").contains("\"hello\" not \"hello"));
    }

    fn fail_fast() {
        let result = Self::run_with(DialectConfig::full(), "print(\"before\")\nprint(oops)\nprint(\"after\")", &[]);
        assert_eq!(result.output_lines, lines!["before"]);
        assert_eq!(result.errors.len(), 1);

        let result = Self::run_with(DialectConfig::full(), "print(\"before\")\nprint(\"after)", &[]);
        assert_eq!(result.output_lines, lines![]);
    }

    fn idempotence() {
        let src = "name = input(\"? \")\nprint(\"Hi \" + name)\nprint(missing)";
        let first = Self::run_with(DialectConfig::full(), src, &["Alex"]);
        let second = Self::run_with(DialectConfig::full(), src, &["Alex"]);
        assert_eq!(first, second);
    }

    fn run_all() {
        Self::print_literal();
        Self::print_only_lesson();
        Self::simple_variable_assignment();
        Self::variable_reassign();
        Self::string_concat();
        Self::input_lesson();
        Self::booleans();
        Self::comment();
        Self::beginner_mistakes();
        Self::friendly_messages();
        Self::fail_fast();
        Self::idempotence();
    }
}

#[cfg(test)]
mod tests {
    use crate::Test;

    #[test]
    fn suite() {
        Test::run_all();
    }
}
