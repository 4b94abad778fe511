use std::io::stderr;
use log::debug;
use penguin_ast::dialect::DialectConfig;
use penguin_runtime::input::{InputSource, SimulatedInput};
use penguin_runtime::{Interpreter, NO_OUTPUT_PLACEHOLDER};
use crate::args::ParseSource;
use crate::error::TaskExecutionError;
use crate::report::write_report;
use crate::task::Task;
use crate::terminal::{StdinInput, Terminal};

pub struct Interpret {
    pub(crate) dialect: DialectConfig,
    pub(crate) inputs: Vec<String>,
    pub(crate) interactive: bool,
}

impl Task for Interpret {
    type Environment = ParseSource;
    type Error = TaskExecutionError;

    fn execute(&self, environment: Self::Environment) -> Result<(), Self::Error> {
        let source = environment.source()?;
        let interpreter = Interpreter::new(self.dialect);

        let mut input: Box<dyn InputSource> = if self.interactive {
            Box::new(StdinInput)
        } else {
            Box::new(SimulatedInput::new(self.inputs.iter().cloned()))
        };
        let mut terminal = Terminal::new(self.interactive);

        let result = interpreter.execute_with(&source, input.as_mut(), &mut terminal);
        debug!("{} line(s) printed, {} variable(s)", terminal.printed(), result.variables.len());

        if let Some(error) = result.first_error() {
            write_report(error, &source, stderr())?;
            return Err(error.clone().into())
        }

        if terminal.printed() == 0 {
            println!("{NO_OUTPUT_PLACEHOLDER}");
        }

        Ok(())
    }
}
