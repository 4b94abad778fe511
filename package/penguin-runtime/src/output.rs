use std::fmt::Debug;

pub trait OutputAccumulator: Debug {
    fn output(&mut self, line: String);

    /// Records one `input()` exchange as a single conversation line.
    fn exchange(&mut self, prompt: &str, answer: &str) {
        self.output(format!("{prompt}{answer}"));
    }

    fn acc(&self) -> Option<Vec<String>>;
}

#[derive(Debug)]
pub struct PrintToStdout;

impl OutputAccumulator for PrintToStdout {
    fn output(&mut self, line: String) {
        println!("{line}");
    }

    fn acc(&self) -> Option<Vec<String>> {
        None
    }
}

#[derive(Default, Debug)]
pub struct Accumulate(Vec<String>);

impl OutputAccumulator for Accumulate {
    fn output(&mut self, line: String) {
        self.0.push(line);
    }

    fn acc(&self) -> Option<Vec<String>> {
        Some(self.0.clone())
    }
}
