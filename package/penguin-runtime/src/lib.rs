#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod output;
pub mod store;
pub mod value;

use std::collections::HashSet;
use log::debug;
use penguin_ast::dialect::{DialectConfig, Limits};
use penguin_ast::{LogicalLine, Statement};
use penguin_diagnostics::ClassifiedError;
use penguin_lexer::Lexer;
use penguin_parser::error::ParserError;
use penguin_parser::parser::Parser;
use crate::error::{ExecutionFailure, RuntimeError};
use crate::evaluate::{CanBeEvaluated, Scope};
use crate::input::{InputSource, SimulatedInput};
use crate::output::{Accumulate, OutputAccumulator};
use crate::store::{VariableEntry, VariableStore};

/// Placeholder shown for a successful run that printed nothing.
pub const NO_OUTPUT_PLACEHOLDER: &str = "Code ran successfully (no output)";

/// One interpreter per lesson widget. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct Interpreter {
    dialect: DialectConfig,
    limits: Limits,
}

impl Interpreter {
    #[must_use]
    pub fn new(dialect: DialectConfig) -> Self {
        Self {
            dialect,
            limits: Limits::default(),
        }
    }

    #[must_use]
    pub const fn limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    #[must_use]
    pub const fn with_dialect(self, dialect: DialectConfig) -> Self {
        Self { dialect, ..self }
    }

    #[must_use]
    pub const fn dialect(&self) -> &DialectConfig {
        &self.dialect
    }

    /// Runs `source` with pre-supplied answers for `input()`.
    pub fn execute<I, S>(&self, source: &str, inputs: I) -> ExecutionResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = SimulatedInput::new(inputs);
        let mut output = Accumulate::default();
        self.execute_with(source, &mut input, &mut output)
    }

    /// Runs `source` against caller-chosen I/O. Never fails: problems come
    /// back inside the result. `output_lines` is empty when `output` does not
    /// accumulate.
    pub fn execute_with(
        &self,
        source: &str,
        input: &mut dyn InputSource,
        output: &mut dyn OutputAccumulator,
    ) -> ExecutionResult {
        debug!("run start: {} bytes", source.len());
        let mut store = VariableStore::empty();
        let outcome = self.run(source, &mut store, input, output);

        let errors = match &outcome {
            Ok(()) => vec![],
            Err(failure) => {
                debug!("run failed: {failure}");
                vec![classify::classify(failure, &self.dialect)]
            }
        };

        debug!("run finish: success = {}", outcome.is_ok());
        ExecutionResult {
            success: outcome.is_ok(),
            output_lines: output.acc().unwrap_or_default(),
            variables: store.snapshot(),
            errors,
        }
    }

    fn run(
        &self,
        source: &str,
        store: &mut VariableStore,
        input: &mut dyn InputSource,
        output: &mut dyn OutputAccumulator,
    ) -> Result<(), ExecutionFailure> {
        let lines = Lexer::create(source)
            .limits(self.limits)
            .reject_empty(self.dialect.reject_empty_source)
            .split_lines()?;

        let parser = Parser::new(&self.dialect);
        let classified = lines
            .iter()
            .map(|line| parser.classify(line))
            .collect::<Vec<_>>();

        let assigned_anywhere = classified
            .iter()
            .filter_map(|s| match s {
                Ok(Statement::Assignment { name, .. } | Statement::InputAssignment { name, .. }) => {
                    Some(name.as_name().to_string())
                }
                _ => None,
            })
            .collect::<HashSet<_>>();

        for (line, statement) in lines.iter().zip(classified) {
            self.run_statement(&parser, line, statement?, store, &assigned_anywhere, input, output)?;
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn run_statement(
        &self,
        parser: &Parser,
        line: &LogicalLine,
        statement: Statement,
        store: &mut VariableStore,
        assigned_anywhere: &HashSet<String>,
        input: &mut dyn InputSource,
        output: &mut dyn OutputAccumulator,
    ) -> Result<(), ExecutionFailure> {
        let at = |error: RuntimeError| ExecutionFailure::Runtime { line: line.line, error };

        match statement {
            Statement::Assignment { name, rhs } => {
                let expression = parser.parse_expression(&rhs, line.line)?;
                let value = expression.evaluate(&Scope::new(store, assigned_anywhere)).map_err(at)?;
                store.set(name, value);
            }
            Statement::PrintCall { args } => {
                let arguments = parser.parse_arguments(&args, line.line)?;
                let value = arguments[..].evaluate(&Scope::new(store, assigned_anywhere)).map_err(at)?;
                output.output(value.to_string());
            }
            Statement::InputAssignment { name, prompt } => {
                let answer = input.next_input(&prompt);
                output.exchange(&prompt, &answer);
                store.set(name, answer.into());
            }
            Statement::Unsupported { raw } => {
                return Err(at(RuntimeError::Unsupported { raw: raw.into_boxed_str() }))
            }
        }

        Ok(())
    }

    /// The logical lines of `source`, for tooling.
    ///
    /// # Errors
    /// Same lexer failures a run would report.
    pub fn lines(&self, source: &str) -> Result<Vec<LogicalLine>, ClassifiedError> {
        Lexer::create(source)
            .limits(self.limits)
            .reject_empty(self.dialect.reject_empty_source)
            .split_lines()
            .map_err(|e| classify::classify(&e.into(), &self.dialect))
    }

    /// Classifies every logical line without running anything.
    ///
    /// # Errors
    /// Same lexer failures a run would report.
    pub fn statements(&self, source: &str) -> Result<Vec<(LogicalLine, Result<Statement, ParserError>)>, ClassifiedError> {
        let parser = Parser::new(&self.dialect);
        self.lines(source).map(|lines| {
            lines
                .into_iter()
                .map(|line| {
                    let statement = parser.classify(&line);
                    (line, statement)
                })
                .collect()
        })
    }
}

/// Everything one run produced.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ExecutionResult {
    pub success: bool,
    pub output_lines: Vec<String>,
    pub variables: Vec<VariableEntry>,
    /// At most one: runs stop at the first error.
    pub errors: Vec<ClassifiedError>,
}

impl ExecutionResult {
    #[must_use]
    pub fn output_text(&self) -> String {
        self.output_lines.join("\n")
    }

    /// Like [`Self::output_text`], but a successful silent run shows
    /// [`NO_OUTPUT_PLACEHOLDER`].
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.success && self.output_lines.is_empty() {
            NO_OUTPUT_PLACEHOLDER.to_string()
        } else {
            self.output_text()
        }
    }

    #[must_use]
    pub fn first_error(&self) -> Option<&ClassifiedError> {
        self.errors.first()
    }

    /// Beginner-facing message with its line, or `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.first_error().map(ClassifiedError::located_message)
    }
}
