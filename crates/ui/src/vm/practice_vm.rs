use std::collections::HashSet;

use conjuga_core::model::{FieldStatus, Person, Tense};
use services::{PracticeSession, PracticeSnapshot, SessionError, SessionLoopService};
use tracing::{debug, warn};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    Edit { person: Person, value: String },
    Previous,
    Next,
    Reveal,
}

/// One answer input as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldVm {
    pub person: Person,
    pub pronoun: &'static str,
    pub value: String,
    pub class: &'static str,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeFrame {
    pub verb: String,
    pub tense: &'static str,
    pub fields: Vec<FieldVm>,
    pub progress_label: String,
    pub completed_label: String,
    pub is_complete: bool,
    /// Last exercise of the sequence, answered.
    pub finished: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PracticeFrame {
    fn from_snapshot(snapshot: &PracticeSnapshot, locked: bool) -> Self {
        let fields = Person::ALL
            .iter()
            .map(|&person| FieldVm {
                person,
                pronoun: person.pronoun(),
                value: snapshot.answers[person.index()].clone(),
                class: field_class(snapshot.fields[person.index()]),
                locked,
            })
            .collect();

        Self {
            verb: snapshot.exercise.verb().to_string(),
            tense: snapshot.exercise.tense().name(),
            fields,
            progress_label: snapshot.progress.label(),
            completed_label: format!("{} solved", snapshot.progress.completed),
            is_complete: snapshot.is_complete,
            finished: snapshot.is_complete
                && snapshot.progress.position + 1 == snapshot.progress.total,
            can_go_previous: snapshot.can_go_previous,
            can_go_next: snapshot.can_go_next,
        }
    }
}

fn field_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Empty => "answer-input",
        FieldStatus::Correct => "answer-input answer-input--correct",
        FieldStatus::Incorrect => "answer-input answer-input--incorrect",
    }
}

/// Practice screen state: the running session plus the exercises whose
/// answers were revealed. A revealed (verb, tense) pair stays read-only for the
/// rest of the session; the same verb drawn in another tense stays editable.
pub struct PracticeVm {
    session: PracticeSession,
    revealed: HashSet<(String, Tense)>,
}

impl PracticeVm {
    #[must_use]
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            revealed: HashSet::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    fn current_key(&self) -> (String, Tense) {
        let exercise = self.session.current_exercise();
        (exercise.verb().to_string(), exercise.tense())
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed.contains(&self.current_key())
    }

    /// Answer buffers are shared per verb, so landing on a revealed exercise
    /// after another tense of the same verb was typed restores its forms.
    fn arrive(&mut self, moved: bool) -> bool {
        if moved && self.is_revealed() {
            self.session.reveal();
        }
        moved
    }

    /// Apply one intent. Returns `false` when the intent had no effect.
    pub fn apply(&mut self, intent: PracticeIntent) -> bool {
        match intent {
            PracticeIntent::Edit { person, value } => {
                if self.is_revealed() {
                    return false;
                }
                self.session.update_current(person, value);
                true
            }
            PracticeIntent::Previous => {
                let before = self.session.cursor();
                let moved = self.session.previous() != before;
                self.arrive(moved)
            }
            PracticeIntent::Next => {
                let before = self.session.cursor();
                match self.session.next() {
                    Ok(cursor) => self.arrive(cursor != before),
                    Err(err) => {
                        debug!(%err, "next ignored");
                        false
                    }
                }
            }
            PracticeIntent::Reveal => {
                let key = self.current_key();
                self.session.reveal();
                self.revealed.insert(key)
            }
        }
    }

    #[must_use]
    pub fn frame(&self) -> PracticeFrame {
        PracticeFrame::from_snapshot(&self.session.snapshot(), self.is_revealed())
    }
}

fn view_error(err: &SessionError) -> ViewError {
    match err {
        SessionError::Dictionary(_) => ViewError::DictionaryUnavailable,
        SessionError::EmptyDictionary | SessionError::Empty => ViewError::EmptyDictionary,
        SessionError::Conjugation(_) => ViewError::UnsupportedVerb,
        _ => ViewError::Unknown,
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        view_error(err)
    }
}

/// # Errors
///
/// Returns `ViewError::DictionaryUnavailable` when the dictionary cannot be
/// loaded, `ViewError::EmptyDictionary` when there is nothing to drill and
/// `ViewError::UnsupportedVerb` for verbs the engine cannot conjugate.
pub async fn start_practice(session_loop: &SessionLoopService) -> Result<PracticeVm, ViewError> {
    match session_loop.start_session().await {
        Ok(session) => Ok(PracticeVm::new(session)),
        Err(err) => {
            warn!(%err, "practice session failed to start");
            Err(ViewError::from(&err))
        }
    }
}
