use std::io;

/// Source of whole lines of user input.
///
/// Reading may fail; callers decide whether to retry.
pub trait Lines {
    /// Show `prompt` and read one line, without the trailing newline.
    fn read(&mut self, prompt: &str) -> io::Result<String>;
}
