use conjuga_core::model::Tense;

use crate::error::SettingsError;

/// Knobs for building a practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSettings {
    sequence_length: usize,
    tenses: Vec<Tense>,
    seed: Option<u64>,
}

impl PracticeSettings {
    pub const DEFAULT_SEQUENCE_LENGTH: usize = 20;

    /// Creates validated settings. Repeated tenses are dropped, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroLength` for an empty sequence and
    /// `SettingsError::NoTenses` when no tense is enabled.
    pub fn new(
        sequence_length: usize,
        tenses: impl IntoIterator<Item = Tense>,
        seed: Option<u64>,
    ) -> Result<Self, SettingsError> {
        if sequence_length == 0 {
            return Err(SettingsError::ZeroLength);
        }
        let mut unique = Vec::new();
        for tense in tenses {
            if !unique.contains(&tense) {
                unique.push(tense);
            }
        }
        if unique.is_empty() {
            return Err(SettingsError::NoTenses);
        }
        Ok(Self {
            sequence_length,
            tenses: unique,
            seed,
        })
    }

    #[must_use]
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Tenses drawn from, in decoding order.
    #[must_use]
    pub fn tenses(&self) -> &[Tense] {
        &self.tenses
    }

    /// Fixed RNG seed for reproducible sequences.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            sequence_length: Self::DEFAULT_SEQUENCE_LENGTH,
            tenses: Tense::ALL.to_vec(),
            seed: None,
        }
    }
}
