use std::array;

use crate::model::{Person, Tense};

/// One row of a conjugation table: a form per person.
pub type Forms = [String; Person::COUNT];

/// Every tense/person form of a single verb.
///
/// Always complete: six rows of five forms, so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationTable {
    verb: String,
    rows: [Forms; Tense::COUNT],
}

impl ConjugationTable {
    pub(crate) fn from_fn(
        verb: impl Into<String>,
        mut form: impl FnMut(Tense, Person) -> String,
    ) -> Self {
        let rows = array::from_fn(|t| {
            let tense = Tense::ALL[t];
            array::from_fn(|p| form(tense, Person::ALL[p]))
        });
        Self {
            verb: verb.into(),
            rows,
        }
    }

    pub(crate) fn set(&mut self, tense: Tense, person: Person, form: impl Into<String>) {
        self.rows[tense.index()][person.index()] = form.into();
    }

    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    #[must_use]
    pub fn row(&self, tense: Tense) -> &Forms {
        &self.rows[tense.index()]
    }

    #[must_use]
    pub fn form(&self, tense: Tense, person: Person) -> &str {
        &self.rows[tense.index()][person.index()]
    }

    /// Rows in tense order.
    pub fn rows(&self) -> impl Iterator<Item = (Tense, &Forms)> {
        Tense::ALL.into_iter().zip(self.rows.iter())
    }
}
