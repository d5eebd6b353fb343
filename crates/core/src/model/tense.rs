use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tense: {raw}")]
pub struct UnknownTense {
    pub raw: String,
}

/// Grammatical tense/mood drilled by the quiz.
///
/// Declaration order is significant: it defines the tense index used when a
/// practice sequence entry is decoded into a (verb, tense) pair.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Presente,
    Imperfecto,
    #[serde(rename = "pretérito", alias = "preterito")]
    Preterito,
    Futuro,
    Condicional,
    Subjuntivo,
}

impl Tense {
    pub const COUNT: usize = 6;

    pub const ALL: [Tense; Self::COUNT] = [
        Tense::Presente,
        Tense::Imperfecto,
        Tense::Preterito,
        Tense::Futuro,
        Tense::Condicional,
        Tense::Subjuntivo,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name as it appears in dictionary documents and on screen.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tense::Presente => "presente",
            Tense::Imperfecto => "imperfecto",
            Tense::Preterito => "pretérito",
            Tense::Futuro => "futuro",
            Tense::Condicional => "condicional",
            Tense::Subjuntivo => "subjuntivo",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tense {
    type Err = UnknownTense;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "presente" => Ok(Tense::Presente),
            "imperfecto" => Ok(Tense::Imperfecto),
            "pretérito" | "preterito" => Ok(Tense::Preterito),
            "futuro" => Ok(Tense::Futuro),
            "condicional" => Ok(Tense::Condicional),
            "subjuntivo" => Ok(Tense::Subjuntivo),
            _ => Err(UnknownTense { raw: s.to_owned() }),
        }
    }
}
