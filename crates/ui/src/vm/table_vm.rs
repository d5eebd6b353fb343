use conjuga_core::model::{ConjugationTable, Person};
use services::SessionLoopService;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRowVm {
    pub tense: &'static str,
    pub forms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationTableVm {
    pub verb: String,
    pub irregular: bool,
    pub pronouns: Vec<&'static str>,
    pub rows: Vec<TableRowVm>,
}

impl ConjugationTableVm {
    #[must_use]
    pub fn from_table(table: &ConjugationTable, irregular: bool) -> Self {
        let rows = table
            .rows()
            .map(|(tense, forms)| TableRowVm {
                tense: tense.name(),
                forms: forms.to_vec(),
            })
            .collect();

        Self {
            verb: table.verb().to_string(),
            irregular,
            pronouns: Person::ALL.iter().map(|person| person.pronoun()).collect(),
            rows,
        }
    }
}

/// All practice verbs in dictionary order.
///
/// # Errors
///
/// Returns `ViewError::DictionaryUnavailable` if the dictionary cannot be loaded.
pub async fn load_verbs(session_loop: &SessionLoopService) -> Result<Vec<String>, ViewError> {
    let dictionary = session_loop
        .dictionary()
        .await
        .map_err(|err| ViewError::from(&err))?;
    Ok(dictionary.verbs().to_vec())
}

/// # Errors
///
/// Returns `ViewError::UnsupportedVerb` for infinitives outside the three
/// verb classes and `ViewError::DictionaryUnavailable` if the dictionary
/// cannot be loaded.
pub async fn load_table(
    session_loop: &SessionLoopService,
    verb: &str,
) -> Result<ConjugationTableVm, ViewError> {
    let verb = verb.trim().to_lowercase();
    let dictionary = session_loop
        .dictionary()
        .await
        .map_err(|err| ViewError::from(&err))?;
    let table = session_loop
        .conjugate(&verb)
        .await
        .map_err(|err| ViewError::from(&err))?;
    Ok(ConjugationTableVm::from_table(
        &table,
        dictionary.is_irregular(&verb),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use conjuga_core::Conjugator;
    use conjuga_core::model::{IrregularOverrides, Tense, VerbDictionary};

    use super::*;

    #[test]
    fn table_vm_lists_every_tense_in_order() {
        let dictionary = VerbDictionary::from_parts(
            Vec::new(),
            [(
                "ser".to_string(),
                IrregularOverrides::new().with(Tense::Presente, Person::Yo, "soy"),
            )],
        );
        let engine = Conjugator::new(Arc::new(dictionary));
        let table = engine.conjugate("ser").unwrap();

        let vm = ConjugationTableVm::from_table(&table, true);
        assert_eq!(vm.verb, "ser");
        assert!(vm.irregular);
        assert_eq!(vm.pronouns, ["yo", "tú", "él", "nosotros", "ellos"]);
        let tenses = vm.rows.iter().map(|row| row.tense).collect::<Vec<_>>();
        assert_eq!(
            tenses,
            ["presente", "imperfecto", "pretérito", "futuro", "condicional", "subjuntivo"]
        );
        assert_eq!(vm.rows[0].forms[0], "soy");
        // Cells without an override fall back to the regular derivation.
        assert_eq!(vm.rows[0].forms[2], "se");
    }
}
