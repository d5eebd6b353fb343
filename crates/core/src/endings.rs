use crate::model::{Person, Tense, VerbClass};

type Row = [&'static str; Person::COUNT];

// Indexed [tense][person], tenses in `Tense::ALL` order.
const AR: [Row; Tense::COUNT] = [
    ["o", "as", "a", "amos", "an"],
    ["aba", "abas", "aba", "ábamos", "aban"],
    ["é", "aste", "ó", "amos", "aron"],
    ["aré", "arás", "ará", "aremos", "arán"],
    ["aría", "arías", "aría", "aríamos", "arían"],
    ["e", "es", "e", "emos", "en"],
];

const ER: [Row; Tense::COUNT] = [
    ["o", "es", "e", "emos", "en"],
    ["ía", "ías", "ía", "íamos", "ían"],
    ["í", "iste", "ió", "imos", "ieron"],
    ["eré", "erás", "erá", "eremos", "erán"],
    ["ería", "erías", "ería", "eríamos", "erían"],
    ["a", "as", "a", "amos", "an"],
];

const IR: [Row; Tense::COUNT] = [
    ["o", "es", "e", "imos", "en"],
    ["ía", "ías", "ía", "íamos", "ían"],
    ["í", "iste", "ió", "imos", "ieron"],
    ["iré", "irás", "irá", "iremos", "irán"],
    ["iría", "irías", "iría", "iríamos", "irían"],
    ["a", "as", "a", "amos", "an"],
];

/// Regular suffix appended to the root for a class, tense and person.
#[must_use]
pub fn ending(class: VerbClass, tense: Tense, person: Person) -> &'static str {
    let table = match class {
        VerbClass::Ar => &AR,
        VerbClass::Er => &ER,
        VerbClass::Ir => &IR,
    };
    table[tense.index()][person.index()]
}
