// clap issue?: https://github.com/clap-rs/clap/issues/4733
#![warn(clippy::almost_swapped)]

use std::fs;
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use strum::EnumString;
use thiserror::Error;
use penguin_ast::dialect::{DialectConfig, DialectPreset};
use crate::task::emit::UnstableEmit;
use crate::task::interpret::Interpret;
use crate::task::repl::Repl;
use crate::task::Task;
use crate::error::TaskExecutionError;

#[derive(Parser)]
#[clap(about = "Runs beginner Python lessons with the penguin interpreter")]
pub struct Args {
    #[clap(subcommand)]
    sub_command: SubCom
}

pub enum ParseSource {
    RawSource(String),
    FromFile(PathBuf)
}

#[derive(Error, Debug)]
pub enum ReadSourceError {
    #[error("please specify --input-file or --input-source")]
    Missing,
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ParseSource {
    fn load(input_file: Option<PathBuf>, input_source: Option<String>) -> Result<Self, ReadSourceError> {
        input_file
            .map(Self::FromFile)
            .or_else(|| input_source.map(Self::RawSource))
            .ok_or(ReadSourceError::Missing)
    }

    pub fn source(&self) -> Result<String, ReadSourceError> {
        match self {
            Self::RawSource(a) => Ok(a.clone()),
            Self::FromFile(path) => fs::read_to_string(path).map_err(|source| ReadSourceError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Dialect selection shared by every subcommand.
#[derive(clap::Args, Copy, Clone, Debug)]
pub struct DialectArgs {
    /// Lesson dialect: print-only, variables, input, concatenation or full.
    #[clap(long, default_value = "full")]
    dialect: DialectPreset,
    /// Treat a program without statements as an error.
    #[clap(long)]
    reject_empty: bool,
}

impl DialectArgs {
    fn config(self) -> DialectConfig {
        let config = DialectConfig::from(self.dialect);
        if self.reject_empty {
            config.rejecting_empty_source()
        } else {
            config
        }
    }
}

impl Args {
    pub fn execute(self) -> Result<(), TaskExecutionError> {
        match self.sub_command {
            SubCom::Repl { dialect } => {
                let task = Repl { dialect: dialect.config() };
                task.execute(())?;
                Ok(())
            }
            SubCom::Execute { input_file, input_source, dialect, inputs, interactive } => {
                let task = Interpret {
                    dialect: dialect.config(),
                    inputs,
                    interactive,
                };
                let source = ParseSource::load(input_file, input_source)?;
                task.execute(source)?;
                Ok(())
            }
            SubCom::Emit { emit, input_file, input_source, dialect } => {
                let task = UnstableEmit { phase: emit, dialect: dialect.config() };
                let source = ParseSource::load(input_file, input_source)?;

                task.execute(source)?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand)]
pub enum SubCom {
    /// Reads one line at a time and re-runs the whole session after each.
    Repl {
        #[clap(flatten)]
        dialect: DialectArgs,
    },
    Execute {
        #[clap(long, group = "evaluate_source")]
        input_file: Option<PathBuf>,
        #[clap(long, group = "evaluate_source")]
        input_source: Option<String>,
        #[clap(flatten)]
        dialect: DialectArgs,
        /// Answer for the next `input()` call; repeat for more.
        #[clap(long = "input", short = 'i')]
        inputs: Vec<String>,
        /// Ask the terminal instead of using --input answers.
        #[clap(long, conflicts_with = "inputs")]
        interactive: bool,
    },
    /// Emits unstable intermediate representation for only debug purposes.
    Emit {
        #[clap(long)]
        emit: EmitPhase,
        #[clap(long, group = "evaluate_source")]
        input_file: Option<PathBuf>,
        #[clap(long, group = "evaluate_source")]
        input_source: Option<String>,
        #[clap(flatten)]
        dialect: DialectArgs,
    },
}

#[derive(EnumString)]
#[strum(serialize_all = "snake_case")]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EmitPhase {
    LogicalLines,
    Statements,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use penguin_ast::dialect::DialectConfig;
    use crate::args::{Args, EmitPhase, ParseSource, ReadSourceError, SubCom};

    #[test]
    fn execute_with_answers() {
        let args = Args::try_parse_from([
            "penguin", "execute", "--input-source", "print(1)", "--dialect", "input", "-i", "Alex", "--input", "16",
        ]).unwrap();
        let SubCom::Execute { input_source, dialect, inputs, interactive, .. } = args.sub_command else {
            panic!("expected execute");
        };
        assert_eq!(input_source.as_deref(), Some("print(1)"));
        assert_eq!(dialect.config(), DialectConfig::input());
        assert_eq!(inputs, vec!["Alex", "16"]);
        assert!(!interactive);
    }

    #[test]
    fn file_and_source_conflict() {
        assert!(Args::try_parse_from(["penguin", "execute", "--input-file", "a.py", "--input-source", "x"]).is_err());
        assert!(Args::try_parse_from(["penguin", "execute", "--interactive", "-i", "a"]).is_err());
        assert!(Args::try_parse_from(["penguin", "repl", "--dialect", "loops"]).is_err());
    }

    #[test]
    fn emit_phase() {
        let args = Args::try_parse_from(["penguin", "emit", "--emit", "logical_lines", "--input-source", "x = 1", "--reject-empty"]).unwrap();
        let SubCom::Emit { emit, dialect, .. } = args.sub_command else {
            panic!("expected emit");
        };
        assert_eq!(emit, EmitPhase::LogicalLines);
        assert!(dialect.config().reject_empty_source);
    }

    #[test]
    fn missing_source() {
        assert!(matches!(ParseSource::load(None, None), Err(ReadSourceError::Missing)));
        assert!(matches!(ParseSource::load(None, Some("x".to_string())), Ok(ParseSource::RawSource(_))));
    }
}
