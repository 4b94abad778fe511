use thiserror::Error;
use penguin_diagnostics::ClassifiedError;
use crate::args::ReadSourceError;

#[derive(Error, Debug)]
#[expect(clippy::module_name_repetitions)]
pub enum TaskExecutionError {
    #[error("Failed to read source: {0}")]
    Source(#[from] ReadSourceError),
    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("program stopped: {}", .0.kind)]
    Program(#[from] ClassifiedError),
}
