//! Terminal yes/no prompt

use std::io::{self, BufRead, Write};

use tripdeck_engine::Confirm;

/// Asks on stderr and reads the answer from stdin
///
/// Anything but `y` or `yes` is a no, including end of input.
pub struct StdinConfirm<R> {
    input: R,
}

impl StdinConfirm<io::StdinLock<'static>> {
    /// Prompt on the process stdin
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> StdinConfirm<R> {
    /// Prompt on any line reader
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for StdinConfirm<R> {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
