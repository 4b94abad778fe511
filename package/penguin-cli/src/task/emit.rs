use std::io::stderr;
use tap::Pipe;
use penguin_ast::dialect::DialectConfig;
use penguin_runtime::Interpreter;
use crate::args::{EmitPhase, ParseSource};
use crate::error::TaskExecutionError;
use crate::report::write_report;
use crate::task::Task;

pub struct UnstableEmit {
    pub(crate) phase: EmitPhase,
    pub(crate) dialect: DialectConfig,
}

impl Task for UnstableEmit {
    type Environment = ParseSource;
    type Error = TaskExecutionError;

    fn execute(&self, environment: Self::Environment) -> Result<(), Self::Error> {
        let src = environment.source()?;
        let interpreter = Interpreter::new(self.dialect);

        if self.phase == EmitPhase::LogicalLines {
            return match interpreter.lines(&src) {
                Ok(lines) => {
                    lines.iter().for_each(|l| println!("{:>4} | {}", l.line, l.text));
                    Ok(())
                }
                Err(e) => {
                    write_report(&e, &src, stderr())?;
                    e.pipe(TaskExecutionError::from).pipe(Err)
                }
            }
        }

        match interpreter.statements(&src) {
            Ok(statements) => {
                for (line, statement) in statements {
                    match statement {
                        Ok(s) => println!("{:>4} | {s:?}", line.line),
                        Err(e) => println!("{:>4} | error: {e}", line.line),
                    }
                }
                Ok(())
            }
            Err(e) => {
                write_report(&e, &src, stderr())?;
                e.pipe(TaskExecutionError::from).pipe(Err)
            }
        }
    }
}
