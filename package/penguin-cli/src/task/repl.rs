use std::io::{stderr, stdin, stdout, Write};
use log::debug;
use penguin_ast::dialect::DialectConfig;
use penguin_platform::is_end_of_input;
use penguin_runtime::Interpreter;
use crate::error::TaskExecutionError;
use crate::report::write_report;
use crate::task::Task;
use crate::terminal::{RecordingInput, SessionOutput};

/// Each accepted line is appended to the session program, which is then run
/// from the top with earlier `input()` answers replayed. A line that fails is
/// reported and dropped.
pub struct Repl {
    pub(crate) dialect: DialectConfig,
}

impl Task for Repl {
    type Environment = ();
    type Error = TaskExecutionError;

    fn execute(&self, _environment: Self::Environment) -> Result<(), Self::Error> {
        let interpreter = Interpreter::new(self.dialect);
        let mut program = Vec::<String>::new();
        let mut answers = Vec::<String>::new();
        let mut shown = 0;
        let mut line_count = 1;
        println!("Welcome to REPL!");

        loop {
            print!("REPL:{line_count:03}> ");
            stdout().flush()?;
            let mut line = String::new();
            let n = stdin().read_line(&mut line)?;
            if is_end_of_input(&line, n) {
                break
            }

            program.push(line.trim_end_matches(['\r', '\n']).to_string());
            let source = program.join("\n");
            let answered_before = answers.len();
            let mut output = SessionOutput::default();
            let result = interpreter.execute_with(&source, &mut RecordingInput::new(&mut answers), &mut output);

            result.output_lines.iter().skip(shown).for_each(|l| println!("{l}"));

            if let Some(error) = result.first_error() {
                write_report(error, &source, stderr())?;
                program.pop();
                answers.truncate(answered_before);
            } else {
                shown = result.output_lines.len();
            }

            debug!("session: {} line(s), {} answer(s)", program.len(), answers.len());
            line_count += 1;
        }

        Ok(())
    }
}
