use std::io::{stdin, stdout, Write};
use log::warn;
use penguin_platform::is_end_of_input;
use penguin_runtime::input::InputSource;
use penguin_runtime::output::OutputAccumulator;

/// Shows `prompt` and reads one answer. End of input answers with an empty string.
fn ask(prompt: &str) -> String {
    print!("{prompt}");
    if let Err(e) = stdout().flush() {
        warn!("could not flush prompt: {e}");
    }

    let mut buf = String::new();
    match stdin().read_line(&mut buf) {
        Ok(n) if !is_end_of_input(&buf, n) => buf.trim_end_matches(['\r', '\n']).to_string(),
        Ok(_) => {
            println!();
            String::new()
        }
        Err(e) => {
            warn!("could not read answer: {e}");
            String::new()
        }
    }
}

/// Answers `input()` from the terminal.
#[derive(Debug)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn next_input(&mut self, prompt: &str) -> String {
        ask(prompt)
    }
}

/// Replays answers given earlier in a session and asks the terminal for new ones.
#[derive(Debug)]
pub struct RecordingInput<'a> {
    answers: &'a mut Vec<String>,
    position: usize,
}

impl<'a> RecordingInput<'a> {
    pub fn new(answers: &'a mut Vec<String>) -> Self {
        Self { answers, position: 0 }
    }
}

impl InputSource for RecordingInput<'_> {
    fn next_input(&mut self, prompt: &str) -> String {
        let answer = if let Some(recorded) = self.answers.get(self.position) {
            recorded.clone()
        } else {
            let fresh = ask(prompt);
            self.answers.push(fresh.clone());
            fresh
        };

        self.position += 1;
        answer
    }
}

/// Prints each output line as it is produced and counts them.
///
/// With `answered_live`, an `input()` exchange is not printed again: the
/// terminal already shows the prompt and the typed answer.
#[derive(Debug)]
pub struct Terminal {
    answered_live: bool,
    printed: usize,
}

impl Terminal {
    pub const fn new(answered_live: bool) -> Self {
        Self { answered_live, printed: 0 }
    }

    pub const fn printed(&self) -> usize {
        self.printed
    }
}

impl OutputAccumulator for Terminal {
    fn output(&mut self, line: String) {
        println!("{line}");
        self.printed += 1;
    }

    fn exchange(&mut self, prompt: &str, answer: &str) {
        if self.answered_live {
            self.printed += 1;
        } else {
            self.output(format!("{prompt}{answer}"));
        }
    }

    fn acc(&self) -> Option<Vec<String>> {
        None
    }
}

/// Keeps printed lines for the REPL, which shows only what a new line added.
/// Exchanges are left out because the terminal showed them while asking.
#[derive(Debug, Default)]
pub struct SessionOutput(Vec<String>);

impl OutputAccumulator for SessionOutput {
    fn output(&mut self, line: String) {
        self.0.push(line);
    }

    fn exchange(&mut self, _prompt: &str, _answer: &str) {}

    fn acc(&self) -> Option<Vec<String>> {
        Some(self.0.clone())
    }
}
