use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical subject, in the order forms are listed in every table row.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Person {
    Yo,
    Tu,
    El,
    Nosotros,
    Ellos,
}

impl Person {
    pub const COUNT: usize = 5;

    pub const ALL: [Person; Self::COUNT] = [
        Person::Yo,
        Person::Tu,
        Person::El,
        Person::Nosotros,
        Person::Ellos,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::Yo => "yo",
            Person::Tu => "tú",
            Person::El => "él",
            Person::Nosotros => "nosotros",
            Person::Ellos => "ellos",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pronoun())
    }
}
