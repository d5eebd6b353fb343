use crate::model::table::Forms;
use crate::model::{Person, Tense};

/// Canonical form used when comparing an answer with its target.
///
/// Only surrounding whitespace and letter case are forgiven; accents must match.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Correctness of a single typed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Correct,
    Incorrect,
}

/// Derived state of a whole exercise.
///
/// `Empty` until something is typed, `Partial` while some fields are blank,
/// then `Correct` or `Incorrect` once every field has a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseStatus {
    Empty,
    Partial,
    Correct,
    Incorrect,
}

impl ExerciseStatus {
    #[must_use]
    pub fn from_fields(fields: &[FieldStatus]) -> Self {
        let filled = fields.iter().filter(|f| **f != FieldStatus::Empty).count();
        if filled == 0 {
            Self::Empty
        } else if filled < fields.len() {
            Self::Partial
        } else if fields.iter().all(|f| *f == FieldStatus::Correct) {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// A verb and tense to drill, with the five expected answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    verb: String,
    tense: Tense,
    forms: Forms,
}

impl Exercise {
    #[must_use]
    pub fn new(verb: impl Into<String>, tense: Tense, forms: Forms) -> Self {
        Self {
            verb: verb.into(),
            tense,
            forms,
        }
    }

    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    #[must_use]
    pub fn tense(&self) -> Tense {
        self.tense
    }

    #[must_use]
    pub fn forms(&self) -> &Forms {
        &self.forms
    }

    #[must_use]
    pub fn form(&self, person: Person) -> &str {
        &self.forms[person.index()]
    }

    #[must_use]
    pub fn field_status(&self, person: Person, answer: &str) -> FieldStatus {
        let answer = normalize_answer(answer);
        if answer.is_empty() {
            FieldStatus::Empty
        } else if answer == normalize_answer(self.form(person)) {
            FieldStatus::Correct
        } else {
            FieldStatus::Incorrect
        }
    }

    #[must_use]
    pub fn field_statuses(&self, answers: &Forms) -> [FieldStatus; Person::COUNT] {
        Person::ALL.map(|person| self.field_status(person, &answers[person.index()]))
    }

    #[must_use]
    pub fn status(&self, answers: &Forms) -> ExerciseStatus {
        ExerciseStatus::from_fields(&self.field_statuses(answers))
    }

    /// True iff every answer matches its target after normalization.
    #[must_use]
    pub fn is_solved_by(&self, answers: &Forms) -> bool {
        Person::ALL.iter().all(|person| {
            normalize_answer(&answers[person.index()]) == normalize_answer(self.form(*person))
        })
    }
}
