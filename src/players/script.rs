use super::Lines;
use std::collections::VecDeque;
use std::io;

/// Canned input lines, replayed in order.
///
/// Every prompt shown is recorded so callers can count reprompts.
/// Running out of lines is a bug in the script and panics.
#[derive(Debug, Default)]
pub struct Script {
    lines: VecDeque<io::Result<String>>,
    prompts: Vec<String>,
}

impl Script {
    /// Queue a successful read.
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push_back(Ok(line.to_string()));
        self
    }
    /// Queue a failed read.
    pub fn fail(mut self, kind: io::ErrorKind) -> Self {
        self.lines.push_back(Err(io::Error::from(kind)));
        self
    }
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl<const K: usize> From<[&str; K]> for Script {
    fn from(lines: [&str; K]) -> Self {
        lines.into_iter().fold(Self::default(), Self::line)
    }
}

impl Lines for Script {
    fn read(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().expect("script ran out of lines")
    }
}
