use std::collections::HashMap;

use conjuga_core::model::{Forms, Person};

/// Pure session state: the drawn sequence, the cursor and per-verb answers.
///
/// Answers are keyed by verb, so two entries sharing a verb share a buffer and
/// revisiting an entry restores what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    sequence: Vec<usize>,
    cursor: usize,
    answers: HashMap<String, Forms>,
}

impl SessionState {
    /// Returns `None` for an empty sequence; the cursor needs somewhere to stand.
    #[must_use]
    pub fn new(sequence: Vec<usize>) -> Option<Self> {
        if sequence.is_empty() {
            return None;
        }
        Some(Self {
            sequence,
            cursor: 0,
            answers: HashMap::new(),
        })
    }

    #[must_use]
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.sequence[self.cursor]
    }

    /// Moves the cursor by `delta`, clamped to the sequence. Returns the new cursor.
    pub fn move_by(&mut self, delta: isize) -> usize {
        let last = self.sequence.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.cursor
    }

    /// Registers an empty buffer for `verb` unless one exists.
    pub fn track_verb(&mut self, verb: &str) {
        if !self.answers.contains_key(verb) {
            self.answers.insert(verb.to_owned(), Forms::default());
        }
    }

    #[must_use]
    pub fn answers(&self, verb: &str) -> Option<&Forms> {
        self.answers.get(verb)
    }

    /// Replaces one entry of `verb`'s buffer. Returns false if the verb is untracked.
    pub fn set_answer(&mut self, verb: &str, person: Person, value: impl Into<String>) -> bool {
        match self.answers.get_mut(verb) {
            Some(buffer) => {
                buffer[person.index()] = value.into();
                true
            }
            None => false,
        }
    }

    /// Replaces the whole buffer of a tracked verb.
    pub fn fill(&mut self, verb: &str, forms: Forms) -> bool {
        match self.answers.get_mut(verb) {
            Some(buffer) => {
                *buffer = forms;
                true
            }
            None => false,
        }
    }
}
