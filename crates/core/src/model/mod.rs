mod dictionary;
mod exercise;
mod person;
mod table;
mod tense;
mod verb;

pub use dictionary::{DictionaryError, IrregularOverrides, VerbDictionary};
pub use exercise::{Exercise, ExerciseStatus, FieldStatus, normalize_answer};
pub use person::Person;
pub use table::{ConjugationTable, Forms};
pub use tense::{Tense, UnknownTense};
pub use verb::{VerbClass, split_infinitive};
