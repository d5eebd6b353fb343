use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::endings::ending;
use crate::model::{ConjugationTable, Exercise, Tense, VerbDictionary, split_infinitive};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConjugationError {
    #[error("unsupported verb form `{verb}`: infinitive must end in -ar, -er or -ir")]
    UnknownVerbClass { verb: String },
}

//
// ─── REGULAR DERIVATION ────────────────────────────────────────────────────────
//

/// Conjugates `verb` with the regular suffix rules only.
///
/// # Errors
///
/// Returns `ConjugationError::UnknownVerbClass` if the infinitive does not end
/// in one of the three known endings.
///
/// # Examples
///
/// ```
/// # use conjuga_core::regular_table;
/// # use conjuga_core::model::{Person, Tense};
/// let table = regular_table("hablar").unwrap();
/// assert_eq!(table.form(Tense::Presente, Person::Nosotros), "hablamos");
/// ```
pub fn regular_table(verb: &str) -> Result<ConjugationTable, ConjugationError> {
    let (root, class) = split_infinitive(verb).ok_or_else(|| ConjugationError::UnknownVerbClass {
        verb: verb.to_owned(),
    })?;
    Ok(ConjugationTable::from_fn(verb, |tense, person| {
        let mut form = String::with_capacity(root.len() + 8);
        form.push_str(root);
        form.push_str(ending(class, tense, person));
        form
    }))
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Conjugation engine bound to one dictionary.
///
/// Tables are derived on first request and then shared; each dictionary verb
/// is computed once per engine and never changes afterwards. Infinitives the
/// dictionary does not list are derived on every call and never cached, so
/// free-form lookups cannot grow the map.
#[derive(Debug)]
pub struct Conjugator {
    dictionary: Arc<VerbDictionary>,
    cache: RwLock<HashMap<String, Arc<ConjugationTable>>>,
}

impl Conjugator {
    #[must_use]
    pub fn new(dictionary: Arc<VerbDictionary>) -> Self {
        Self {
            dictionary,
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<VerbDictionary> {
        &self.dictionary
    }

    /// Full table for `verb`: regular rules with any irregular cells laid on top.
    ///
    /// # Errors
    ///
    /// Returns `ConjugationError::UnknownVerbClass` for infinitives outside the
    /// three known classes, irregular or not.
    pub fn conjugate(&self, verb: &str) -> Result<Arc<ConjugationTable>, ConjugationError> {
        if let Some(table) = self.read_cache().get(verb) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.derive(verb)?);
        if !self.dictionary.contains(verb) {
            return Ok(table);
        }
        let mut cache = self.write_cache();
        let entry = cache.entry(verb.to_owned()).or_insert(table);
        Ok(Arc::clone(entry))
    }

    /// Exercise for one row of `verb`'s table.
    ///
    /// # Errors
    ///
    /// Propagates `ConjugationError` from `conjugate`.
    pub fn exercise(&self, verb: &str, tense: Tense) -> Result<Exercise, ConjugationError> {
        let table = self.conjugate(verb)?;
        Ok(Exercise::new(verb, tense, table.row(tense).clone()))
    }

    /// Number of verbs already derived.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.read_cache().len()
    }

    fn derive(&self, verb: &str) -> Result<ConjugationTable, ConjugationError> {
        let mut table = regular_table(verb)?;
        if let Some(overrides) = self.dictionary.overrides(verb) {
            for (tense, person, form) in overrides.iter() {
                table.set(tense, person, form);
            }
        }
        Ok(table)
    }

    // Entries are only ever inserted whole, so a poisoned lock still guards a
    // consistent map.
    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<ConjugationTable>>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<ConjugationTable>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
