use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::model::{Person, Tense};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DictionaryError {
    #[error("malformed verb dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("verb dictionary must be a JSON object with `regular` and `irregular` keys")]
    NotAnObject,

    #[error("irregular verb `{verb}` lists {len} forms for {tense}; at most 5 are allowed")]
    TooManyForms {
        verb: String,
        tense: Tense,
        len: usize,
    },
}

/// Sparse per-cell overrides for one irregular verb.
///
/// Only cells present here differ from the regular derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularOverrides {
    cells: BTreeMap<(Tense, Person), String>,
}

impl IrregularOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, tense: Tense, person: Person, form: impl Into<String>) -> Self {
        self.insert(tense, person, form);
        self
    }

    pub fn insert(&mut self, tense: Tense, person: Person, form: impl Into<String>) {
        self.cells.insert((tense, person), form.into());
    }

    #[must_use]
    pub fn get(&self, tense: Tense, person: Person) -> Option<&str> {
        self.cells.get(&(tense, person)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tense, Person, &str)> {
        self.cells
            .iter()
            .map(|((tense, person), form)| (*tense, *person, form.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn from_rows(
        verb: &str,
        rows: BTreeMap<Tense, Vec<Option<String>>>,
    ) -> Result<Self, DictionaryError> {
        let mut overrides = Self::new();
        for (tense, row) in rows {
            if row.len() > Person::COUNT {
                return Err(DictionaryError::TooManyForms {
                    verb: verb.to_owned(),
                    tense,
                    len: row.len(),
                });
            }
            for (person, form) in Person::ALL.into_iter().zip(row) {
                if let Some(form) = form {
                    overrides.insert(tense, person, form);
                }
            }
        }
        Ok(overrides)
    }
}

/// On-disk shape of `verbs.json`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryDocument {
    #[serde(default)]
    regular: Vec<String>,
    #[serde(default)]
    irregular: BTreeMap<String, BTreeMap<Tense, Vec<Option<String>>>>,
}

/// The verbs available for practice, loaded once and immutable afterwards.
///
/// Verb order is the regular list as given, followed by irregular verbs in
/// alphabetical order. A verb listed in both places appears once, as irregular.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbDictionary {
    verbs: Vec<String>,
    irregular: HashMap<String, IrregularOverrides>,
}

impl VerbDictionary {
    /// Parse a dictionary document.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NotAnObject` unless the top level is an object,
    /// `DictionaryError::Parse` for JSON that does not match the shape and
    /// `DictionaryError::TooManyForms` when an override row is longer than five.
    pub fn from_json(raw: &str) -> Result<Self, DictionaryError> {
        // Struct derives also accept positional arrays; only objects are documents.
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(DictionaryError::NotAnObject);
        }
        let doc: DictionaryDocument = serde_json::from_value(value)?;
        let irregular = doc
            .irregular
            .into_iter()
            .map(|(verb, rows)| {
                let overrides = IrregularOverrides::from_rows(&verb, rows)?;
                Ok((verb, overrides))
            })
            .collect::<Result<Vec<_>, DictionaryError>>()?;
        Ok(Self::from_parts(doc.regular, irregular))
    }

    #[must_use]
    pub fn from_parts(
        regular: impl IntoIterator<Item = String>,
        irregular: impl IntoIterator<Item = (String, IrregularOverrides)>,
    ) -> Self {
        let mut irregular: Vec<(String, IrregularOverrides)> = irregular.into_iter().collect();
        irregular.sort_by(|left, right| left.0.cmp(&right.0));
        irregular.dedup_by(|right, left| left.0 == right.0);

        let irregular: HashMap<String, IrregularOverrides> = irregular.into_iter().collect();
        let mut irregular_names: Vec<&String> = irregular.keys().collect();
        irregular_names.sort();

        let mut verbs: Vec<String> = Vec::new();
        for verb in regular {
            if !irregular.contains_key(&verb) && !verbs.contains(&verb) {
                verbs.push(verb);
            }
        }
        verbs.extend(irregular_names.into_iter().cloned());

        Self { verbs, irregular }
    }

    /// All practice verbs, in sequence-decoding order.
    #[must_use]
    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    #[must_use]
    pub fn verb(&self, index: usize) -> Option<&str> {
        self.verbs.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[must_use]
    pub fn contains(&self, verb: &str) -> bool {
        self.irregular.contains_key(verb) || self.verbs.iter().any(|v| v == verb)
    }

    #[must_use]
    pub fn overrides(&self, verb: &str) -> Option<&IrregularOverrides> {
        self.irregular.get(verb)
    }

    #[must_use]
    pub fn is_irregular(&self, verb: &str) -> bool {
        self.irregular.contains_key(verb)
    }

    #[must_use]
    pub fn irregular_count(&self) -> usize {
        self.irregular.len()
    }
}
