//! Undo/redo history for inkpad
//!
//! Two stacks of full-text snapshots. Snapshots are taken at coarse
//! checkpoints (ends of words, punctuation, deletions) rather than on
//! every keystroke, so a single undo step rewinds a human-sized edit.
//!
//! User edits and programmatic restores enter through different methods:
//! the controller calls [`History::record_edit`] only from the editor's
//! change notification, while [`History::undo`]/[`History::redo`] hand the
//! restored text straight back to the document without re-entering that
//! path. Only the user-edit path clears the redo stack, so a restore can
//! never wipe out the history it is navigating.

/// Oldest snapshots are discarded past this depth.
const MAX_DEPTH: usize = 100;

/// Characters that end a word or sentence and trigger a checkpoint.
const BOUNDARY_CHARS: &[char] = &[' ', '\n', '.', ',', '!', '?'];

/// What kind of user edit the controller observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTrigger {
    /// A word-boundary character was typed (space, newline, punctuation),
    /// or a block of text was inserted wholesale (paste).
    WordBoundary,
    /// Text was removed (Backspace, Delete, cut).
    Destructive,
    /// Any other edit: plain characters mid-word.
    Plain,
}

impl EditTrigger {
    /// Classify an insertion by its final character.
    pub fn from_insertion(text: &str) -> Self {
        match text.chars().last() {
            Some(c) if BOUNDARY_CHARS.contains(&c) => Self::WordBoundary,
            _ => Self::Plain,
        }
    }

    /// Whether this edit is worth a snapshot.
    pub fn takes_checkpoint(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Checkpoint-based undo/redo stacks.
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
    /// The most recent snapshot; the next checkpoint pushes this.
    checkpoint: String,
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            checkpoint: initial.to_owned(),
        }
    }

    /// Forget all history and re-anchor on `text` (new/open).
    pub fn reset(&mut self, text: &str) {
        self.undo.clear();
        self.redo.clear();
        self.checkpoint = text.to_owned();
    }

    /// Single entry point for user edits, called from the editor's change
    /// notification with the text as it stands after the edit.
    ///
    /// Every user edit invalidates the redo stack. Checkpoint-worthy
    /// triggers additionally snapshot the previous state.
    pub fn record_edit(&mut self, current: &str, trigger: EditTrigger) {
        self.redo.clear();
        if trigger.takes_checkpoint() {
            self.push_checkpoint(current);
        }
    }

    /// Snapshot the previous checkpoint if the text actually changed.
    fn push_checkpoint(&mut self, current: &str) {
        if current == self.checkpoint {
            return;
        }
        self.undo
            .push(std::mem::replace(&mut self.checkpoint, current.to_owned()));
        if self.undo.len() > MAX_DEPTH {
            self.undo.remove(0);
        }
    }

    /// Step back one checkpoint. Returns the text to restore, or `None`
    /// if there is nothing to undo (state unchanged).
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let restored = self.undo.pop()?;
        self.redo.push(current.to_owned());
        self.checkpoint = restored.clone();
        Some(restored)
    }

    /// Step forward again after an undo. Returns the text to restore, or
    /// `None` if there is nothing to redo (state unchanged).
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let restored = self.redo.pop()?;
        self.undo.push(current.to_owned());
        self.checkpoint = restored.clone();
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_then_redo_round_trips() {
        let mut history = History::new("");
        history.record_edit("hello ", EditTrigger::WordBoundary);
        history.record_edit("hello world ", EditTrigger::WordBoundary);

        let undone = history.undo("hello world ").unwrap();
        assert_eq!(undone, "hello ");
        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone, "hello world ");
    }

    #[test]
    fn test_redo_restores_uncheckpointed_tail() {
        // Text typed since the last checkpoint is captured by undo itself
        let mut history = History::new("");
        history.record_edit("hello ", EditTrigger::WordBoundary);
        // "wor" typed with no boundary yet
        let undone = history.undo("hello wor").unwrap();
        assert_eq!(undone, "");
        assert_eq!(history.redo(&undone).unwrap(), "hello wor");
    }

    #[test]
    fn test_no_checkpoint_when_text_unchanged() {
        let mut history = History::new("hello ");
        history.record_edit("hello ", EditTrigger::WordBoundary);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_user_edit_clears_redo() {
        let mut history = History::new("");
        history.record_edit("one ", EditTrigger::WordBoundary);
        let _ = history.undo("one ");
        assert!(history.can_redo());

        history.record_edit("two", EditTrigger::Plain);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_restore_does_not_clear_redo() {
        let mut history = History::new("");
        history.record_edit("one ", EditTrigger::WordBoundary);
        history.record_edit("one two ", EditTrigger::WordBoundary);
        let _ = history.undo("one two ");
        let _ = history.undo("one ");
        assert_eq!(history.redo.len(), 2);

        // A second restore must leave the remaining redo entry intact
        let _ = history.redo("");
        assert_eq!(history.redo.len(), 1);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = History::new("anchor");
        assert!(history.undo("anchor").is_none());
        assert!(history.redo("anchor").is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_destructive_edit_checkpoints() {
        let mut history = History::new("");
        history.record_edit("abc ", EditTrigger::WordBoundary);
        history.record_edit("abc def", EditTrigger::Plain);
        assert_eq!(history.undo.len(), 1);

        // Backspace down to "abc de": snapshots the pre-delete state
        history.record_edit("abc de", EditTrigger::Destructive);
        assert_eq!(history.undo.len(), 2);
        assert_eq!(history.undo("abc de").unwrap(), "abc ");
    }

    #[test]
    fn test_depth_bound_evicts_oldest() {
        let mut history = History::new("0");
        for i in 1..=(MAX_DEPTH + 10) {
            history.record_edit(&format!("{} ", i), EditTrigger::WordBoundary);
        }
        assert_eq!(history.undo.len(), MAX_DEPTH);
        // The oldest surviving snapshot is no longer "0"
        assert_eq!(history.undo.first().unwrap(), &format!("{} ", 10));
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut history = History::new("");
        history.record_edit("draft ", EditTrigger::WordBoundary);
        let _ = history.undo("draft ");
        history.reset("loaded file");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        // No checkpoint until the text diverges from the new anchor
        history.record_edit("loaded file", EditTrigger::WordBoundary);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_trigger_classification() {
        assert_eq!(EditTrigger::from_insertion("a"), EditTrigger::Plain);
        assert_eq!(EditTrigger::from_insertion(" "), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion("\n"), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion("word."), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion("wait,"), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion("yes!"), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion("why?"), EditTrigger::WordBoundary);
        assert_eq!(EditTrigger::from_insertion(""), EditTrigger::Plain);
    }
}
