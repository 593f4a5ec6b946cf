use super::Lines;
use dialoguer::Input;
use std::io;

/// The interactive console.
///
/// Accepts empty input so that validation and its messages stay with the
/// caller rather than dialoguer.
#[derive(Debug, Default)]
pub struct Terminal;

impl Lines for Terminal {
    fn read(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(io::Error::other)
    }
}
