use std::collections::VecDeque;
use std::fmt::Debug;
use log::debug;

/// Where `input()` gets its answers.
pub trait InputSource: Debug {
    fn next_input(&mut self, prompt: &str) -> String;
}

/// Pre-supplied answers, consumed in order. Once they run out every further
/// `input()` answers with an empty string.
#[derive(Default, Debug, Clone)]
pub struct SimulatedInput {
    remaining: VecDeque<String>,
}

impl SimulatedInput {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remaining: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for SimulatedInput {
    fn next_input(&mut self, prompt: &str) -> String {
        self.remaining.pop_front().unwrap_or_else(|| {
            debug!("simulated input exhausted at {prompt:?}; answering with empty string");
            String::new()
        })
    }
}
