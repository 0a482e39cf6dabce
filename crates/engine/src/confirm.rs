//! Yes/no confirmation prompts
//!
//! Repeat note edits and todo deletion ask the user before committing. The
//! engine only sees the [`Confirm`] trait; the presentation layer decides
//! how to ask (a terminal prompt, a dialog, a `--yes` flag).

/// Prompt shown before overwriting a stop note a second time
pub const REPEAT_NOTE_EDIT_PROMPT: &str = "Are you sure you want to update this note again?";

/// Prompt shown before deleting a todo
pub const DELETE_TODO_PROMPT: &str = "Delete this todo?";

/// A yes/no prompt
pub trait Confirm {
    /// Ask `message`; `true` means yes
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Answer yes to everything
pub fn accept(_message: &str) -> bool {
    true
}

/// Answer no to everything
pub fn decline(_message: &str) -> bool {
    false
}
