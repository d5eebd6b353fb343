use serde::{Deserialize, Serialize};
use std::fmt;

/// The three infinitive endings the regular rules know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }

    #[must_use]
    pub fn of(infinitive: &str) -> Option<Self> {
        split_infinitive(infinitive).map(|(_, class)| class)
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.suffix())
    }
}

/// Splits an infinitive into its root and class.
///
/// The root may be empty (`ir`).
#[must_use]
pub fn split_infinitive(infinitive: &str) -> Option<(&str, VerbClass)> {
    [VerbClass::Ar, VerbClass::Er, VerbClass::Ir]
        .into_iter()
        .find_map(|class| {
            infinitive
                .strip_suffix(class.suffix())
                .map(|root| (root, class))
        })
}
